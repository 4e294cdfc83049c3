//! Record line format
//!
//! One credential per line: serial, username, password, pipe-delimited with
//! left-justified columns (8/20/20). Widths are advisory for alignment; the
//! writer pads but never truncates, and the reader trims whatever it finds.

/// Serial column of a parsed line.
///
/// A row whose serial does not parse is kept (its username and password
/// still count) but contributes nothing to the max-serial computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialField {
    Parsed(u32),
    Skipped,
}

/// One credential record as read from the store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub serial: SerialField,
    pub username: String,
    pub password: String,
}

/// Header line written once when the store file is created.
pub fn header_line() -> String {
    format!("{:<8}|{:<20}|{:<20}", "Sr.No.", "Username", "Password")
}

/// Render one record line, padded to the column widths.
pub fn record_line(serial: u32, username: &str, password: &str) -> String {
    format!("{:<8}|{:<20}|{:<20}", serial, username, password)
}

/// Parse one stored line: split on `|`, take the first three fields, trim
/// surrounding whitespace. Missing fields read as empty strings.
pub fn parse_line(line: &str) -> CredentialRecord {
    let mut fields = line.split('|');
    let serial_raw = fields.next().unwrap_or("").trim();
    let username = fields.next().unwrap_or("").trim().to_string();
    let password = fields.next().unwrap_or("").trim().to_string();

    let serial = match serial_raw.parse::<u32>() {
        Ok(n) => SerialField::Parsed(n),
        Err(_) => SerialField::Skipped,
    };

    CredentialRecord {
        serial,
        username,
        password,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_line_is_fixed_width() {
        let line = record_line(1, "alice", "abc123!");
        assert_eq!(line, "1       |alice               |abc123!             ");
    }

    #[test]
    fn record_line_does_not_truncate_long_values() {
        let long_name = "a".repeat(25);
        let line = record_line(7, &long_name, "pw1!pw");
        assert!(line.contains(&long_name));
    }

    #[test]
    fn parse_trims_padding() {
        let record = parse_line("3       |alice               |abc123!             ");
        assert_eq!(record.serial, SerialField::Parsed(3));
        assert_eq!(record.username, "alice");
        assert_eq!(record.password, "abc123!");
    }

    #[test]
    fn parse_tolerates_bad_serial() {
        let record = parse_line("oops|bob|pw1!pw");
        assert_eq!(record.serial, SerialField::Skipped);
        assert_eq!(record.username, "bob");
        assert_eq!(record.password, "pw1!pw");
    }

    #[test]
    fn parse_reads_missing_fields_as_empty() {
        let record = parse_line("5|carol");
        assert_eq!(record.serial, SerialField::Parsed(5));
        assert_eq!(record.username, "carol");
        assert_eq!(record.password, "");
    }

    #[test]
    fn header_matches_record_shape() {
        assert_eq!(header_line(), "Sr.No.  |Username            |Password            ");
    }
}
