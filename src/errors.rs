pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_ADDRESS: &str = "ERR_INVALID_ADDRESS";

pub const ERR_DUPLICATE_MANAGER: &str = "ERR_DUPLICATE_MANAGER";
pub const ERR_UNKNOWN_MANAGER: &str = "ERR_UNKNOWN_MANAGER";

pub const ERR_DUPLICATE_SOURCE: &str = "ERR_DUPLICATE_SOURCE";
pub const ERR_SOURCE_NOT_FOUND: &str = "ERR_SOURCE_NOT_FOUND";
pub const ERR_EMPTY_ENDPOINT: &str = "ERR_EMPTY_ENDPOINT";

pub const ERR_LENGTH_MISMATCH: &str = "ERR_LENGTH_MISMATCH";
pub const ERR_EMPTY_LIST: &str = "ERR_EMPTY_LIST";
pub const ERR_INVALID_SHARE: &str = "ERR_INVALID_SHARE";
pub const ERR_INVALID_SHARE_SUM: &str = "ERR_INVALID_SHARE_SUM";

pub const ERR_INVALID_TOKEN: &str = "ERR_INVALID_TOKEN";
pub const ERR_NO_DESTINATIONS: &str = "ERR_NO_DESTINATIONS";
pub const ERR_INSUFFICIENT_BALANCE: &str = "ERR_INSUFFICIENT_BALANCE";

pub const ERR_ALREADY_INITIALIZED_FOR_VERSION: &str = "ERR_ALREADY_INITIALIZED_FOR_VERSION";
