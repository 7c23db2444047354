/// Error code registry for catalog-dash
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Catalog load errors
/// - 7000-7999: Validation errors
/// - 8000-8999: Output errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;
    pub const CONFIG_UNKNOWN_CONTINENT: u16 = 1004;

    // Catalog load errors (2000-2999)
    pub const CATALOG_GENERIC: u16 = 2000;
    pub const CATALOG_NOT_FOUND: u16 = 2001;
    pub const CATALOG_READ_FAILED: u16 = 2002;
    pub const CATALOG_MISSING_COLUMNS: u16 = 2003;
    pub const CATALOG_MALFORMED_ROW: u16 = 2004;
    pub const CATALOG_DUPLICATE_ID: u16 = 2005;
    pub const CATALOG_UNKNOWN_TYPE: u16 = 2006;

    // Validation errors (7000-7999)
    pub const VALIDATION_INVALID_INPUT: u16 = 7001;

    // Output errors (8000-8999)
    pub const OUTPUT_SERIALIZATION: u16 = 8001;
    pub const OUTPUT_WRITE_FAILED: u16 = 8002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",
        1004 => "Unknown continent name in configuration",

        // Catalog errors
        2000 => "Generic catalog error",
        2001 => "Catalog file not found",
        2002 => "Failed to read catalog file",
        2003 => "Catalog is missing required columns",
        2004 => "Catalog contains a malformed row",
        2005 => "Catalog contains a duplicate show id",
        2006 => "Catalog contains an unknown show type",

        // Validation errors
        7001 => "Invalid input value",

        // Output errors
        8001 => "Failed to serialize output",
        8002 => "Failed to write output",

        _ => "Unknown error code",
    }
}
