//! Handle type for CAD objects
//!
//! Handles are unique 64-bit identifiers for all records in a document.
//! They are issued by a [`HandleAllocator`] owned by the document.

use std::fmt;

/// A unique identifier for CAD records
///
/// Handles are 64-bit unsigned integers that uniquely identify
/// records within a CAD document. Handle 0 is reserved and means "no owner".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    /// The null handle (0), used as the owner of root records
    pub const NULL: Handle = Handle(0);

    /// Create a new handle from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::NULL
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl From<Handle> for u64 {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

/// Renders as uppercase hexadecimal without prefix, the form DXF expects.
impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl fmt::UpperHex for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Issues unique, strictly increasing handles for one document.
///
/// Every record constructor takes `&mut HandleAllocator`, so the allocator
/// owned by a [`Document`](crate::Document) is the single source of handles
/// for everything that ends up in that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleAllocator {
    next: u64,
}

impl HandleAllocator {
    /// First handle issued by a fresh allocator.
    pub const FIRST: u64 = 1;

    /// Create an allocator whose first handle is [`HandleAllocator::FIRST`]
    pub fn new() -> Self {
        HandleAllocator { next: Self::FIRST }
    }

    /// Issue a new handle
    pub fn next(&mut self) -> Handle {
        let handle = Handle::new(self.next);
        self.next += 1;
        handle
    }

    /// The handle the next call to [`next`](Self::next) will return
    pub fn peek(&self) -> Handle {
        Handle::new(self.next)
    }

    /// Number of handles issued so far
    pub fn issued(&self) -> u64 {
        self.next - Self::FIRST
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}
