//! The flat member table and the cursor that walks it.
//!
//! A code generator emits one table per module holding the members of every
//! enum in declaration order. Entries carry no link to their enum: each enum
//! consumes the next `member_count` entries, so registration must follow the
//! same order the table was generated in.

/// One `(name, value)` pair of the module-wide member table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberEntry {
    pub name: &'static str,
    /// The native value; unsigned flavors reinterpret the bit pattern.
    pub value: i32,
}

impl MemberEntry {
    #[must_use]
    pub const fn new(name: &'static str, value: i32) -> Self {
        Self { name, value }
    }
}

/// Shortfall reported when the cursor cannot supply the requested entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub required: usize,
    pub remaining: usize,
}

/// A shared position into a member table.
///
/// Passed by `&mut` to each enum creation in turn; every call advances it by
/// exactly the number of members it consumes.
#[derive(Debug)]
pub struct MemberCursor<'t> {
    table: &'t [MemberEntry],
    position: usize,
}

impl<'t> MemberCursor<'t> {
    #[must_use]
    pub fn new(table: &'t [MemberEntry]) -> Self {
        Self { table, position: 0 }
    }

    /// Returns the next `count` entries and advances past them.
    ///
    /// The cursor does not move when fewer than `count` entries remain.
    pub fn take(&mut self, count: usize) -> Result<&'t [MemberEntry], Shortfall> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(Shortfall {
                required: count,
                remaining,
            });
        }
        let start = self.position;
        self.position += count;
        Ok(&self.table[start..self.position])
    }

    /// Number of entries consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.table.len() - self.position
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Length of the whole underlying table.
    #[must_use]
    pub fn table_len(&self) -> usize {
        self.table.len()
    }
}
