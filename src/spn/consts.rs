pub const RECORD_SIZE: usize = 264;

pub const MNC_OFFSET: usize = 0;
pub const MCC_OFFSET: usize = 4;
pub const SHORT_NAME_OFFSET: usize = 8;
pub const LONG_NAME_OFFSET: usize = 136;
pub const NAME_FIELD_SIZE: usize = 128;
