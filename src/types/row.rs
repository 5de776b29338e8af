use std::fmt;

use crate::types::{
    COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, EMAIL_OFFSET, ID_OFFSET, ID_SIZE, ROW_SIZE,
    USERNAME_OFFSET, error::DatabaseError,
};

/// One fixed-schema record. Field lengths are validated by the statement
/// compiler before a row is ever constructed for storage; the codec below
/// relies on that and never truncates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: i32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Serialize into a `ROW_SIZE` slot: id little-endian, then username and
    /// email left-justified in their fixed-width slots, NUL-padded.
    ///
    /// Precondition: `slot.len() == ROW_SIZE` and both strings fit their
    /// column widths.
    pub fn write_to(&self, slot: &mut [u8]) {
        debug_assert_eq!(slot.len(), ROW_SIZE);
        debug_assert!(self.username.len() <= COLUMN_USERNAME_SIZE);
        debug_assert!(self.email.len() <= COLUMN_EMAIL_SIZE);

        slot[ID_OFFSET..ID_OFFSET + ID_SIZE].copy_from_slice(&self.id.to_le_bytes());

        let username = self.username.as_bytes();
        slot[USERNAME_OFFSET..USERNAME_OFFSET + username.len()].copy_from_slice(username);
        slot[USERNAME_OFFSET + username.len()..EMAIL_OFFSET].fill(0);

        let email = self.email.as_bytes();
        slot[EMAIL_OFFSET..EMAIL_OFFSET + email.len()].copy_from_slice(email);
        slot[EMAIL_OFFSET + email.len()..ROW_SIZE].fill(0);
    }

    /// Deserialize from a `ROW_SIZE` slot written by [`Row::write_to`].
    pub fn read_from(slot: &[u8]) -> Result<Self, DatabaseError> {
        if slot.len() != ROW_SIZE {
            return Err(DatabaseError::Serialization {
                details: format!("expected {} byte slot, got {}", ROW_SIZE, slot.len()),
            });
        }

        let mut id_bytes = [0u8; ID_SIZE];
        id_bytes.copy_from_slice(&slot[ID_OFFSET..ID_OFFSET + ID_SIZE]);
        let id = i32::from_le_bytes(id_bytes);

        let username = decode_column(&slot[USERNAME_OFFSET..EMAIL_OFFSET], "username")?;
        let email = decode_column(&slot[EMAIL_OFFSET..ROW_SIZE], "email")?;

        Ok(Self {
            id,
            username,
            email,
        })
    }
}

// Fixed-width columns are NUL-padded on the right; the stored value is
// everything before the first NUL.
fn decode_column(slot: &[u8], column: &str) -> Result<String, DatabaseError> {
    let len = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    String::from_utf8(slot[..len].to_vec()).map_err(|e| DatabaseError::Serialization {
        details: format!("column '{}' is not valid UTF-8: {}", column, e),
    })
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}
