//! CSV codec for the password file.
//!
//! Each row is `username,password[,role]` with no header. A missing role
//! means `Regular`. Rows with any other number of fields, or with a field
//! that is not valid UTF-8, are skipped.

use std::io::{Read, Write};
use std::str;

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};

use super::record::{Role, UserRecord, UserTable};
use crate::Result;

/// Decode a password file into a table.
///
/// Duplicate usernames resolve to the last row in file order.
///
/// # Examples
///
/// ```
/// use keyward::store::codec::decode;
///
/// let table = decode("jdelgad,pass,Admin\nnewUser,pass2\n".as_bytes()).unwrap();
/// assert_eq!(table.len(), 2);
/// assert!(table.get("jdelgad").unwrap().is_admin());
/// assert!(table.get("newUser").unwrap().is_regular());
/// ```
pub fn decode<R: Read>(reader: R) -> Result<UserTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = UserTable::new();
    for row in reader.byte_records() {
        if let Some(record) = decode_row(&row?) {
            table.insert(record);
        }
    }

    Ok(table)
}

fn decode_row(row: &ByteRecord) -> Option<UserRecord> {
    let field = |i: usize| str::from_utf8(&row[i]).ok();

    match row.len() {
        3 => Some(UserRecord::new(field(0)?, field(1)?, Role::from(field(2)?))),
        2 => Some(UserRecord::regular(field(0)?, field(1)?)),
        _ => None,
    }
}

/// Encode a table as password file rows, role always written.
pub fn encode<W: Write>(table: &UserTable, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for user in table {
        writer.write_record([
            user.username.as_str(),
            user.password.as_str(),
            user.role.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(())
}

/// Encode a table into an in-memory buffer.
pub fn encode_to_vec(table: &UserTable) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode(table, &mut buf)?;
    Ok(buf)
}
