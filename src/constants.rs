//! Fixed input file names and the labels they carry

pub const FAKE_FILE: &str = "Fake.csv";
pub const TRUE_FILE: &str = "True.csv";

/// Value of the `source` field on every emitted document
pub const SOURCE_NAME: &str = "kaggle";

pub const DEFAULT_MIN_TEXT_LENGTH: usize = 100;
pub const MIN_TITLE_LENGTH: usize = 10;

/// Length of the hex prefix kept as the document id
pub const DOC_ID_HEX_LEN: usize = 16;

/// Progress is reported each time a file's kept count hits a multiple of this
pub const PROGRESS_INTERVAL: usize = 1000;

pub const DEFAULT_LOG_FILE: &str = "news_prep.log";
