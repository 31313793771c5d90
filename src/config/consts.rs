// src/config/consts.rs

// Upgates flag cell values
pub const FLAG_ON: &str = "1";
pub const FLAG_OFF: &str = "0";
pub const FLAG_BLANK: &str = "";

// Multi-valued column markers
pub const PRICE_MARKER: &str = "price";            // case-insensitive
pub const PARAMETER_MARKER: &str = "PARAMETER";    // case-insensitive
pub const LABEL_MARKER: &str = "LABEL_ACTIVE_YN";  // case-sensitive

// Image list cells
pub const IMAGE_SEPARATORS: [char; 3] = [';', '|', ','];
pub const IMAGE_JOIN: &str = ";";

// Table input
pub const SNIFF_SAMPLE_CHARS: usize = 4096;
pub const SNIFF_CANDIDATES: [char; 4] = [',', ';', '\t', '|'];
pub const SPREADSHEET_EXTS: [&str; 4] = ["xlsx", "xls", "xlsm", "ods"];

// Export
pub const DEFAULT_OUT_SUFFIX: &str = "_variants";
pub const DEFAULT_PARENT_CODE: &str = "NEWCODE";

// Local state
pub const STATE_DIR: &str = ".catalog_tools";
pub const LOG_FILE: &str = "debug.log";

// Image downloader
pub const SUPPLIER_HOST: &str = "northfinder.com";
pub const IMAGE_EXTS: [&str; 4] = [".webp", ".jpg", ".jpeg", ".png"];
pub const ORIGINAL_MARKER: &str = "original_default";
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; NorthfinderImageDownloader/1.0)";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_DIRECT_DIR: &str = "images_direct";
