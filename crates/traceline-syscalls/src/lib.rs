// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Defines the traceline syscall table and public lookup surface.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Windows syscall number to symbol name table used by traceline to
//! symbolize recorded system calls.

mod entries;
mod symbol;

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub use entries::SYSCALL_ENTRIES;
pub use symbol::SymbolName;

/// Read-only mapping from syscall number to `module!function` name.
#[derive(Debug, Clone, Default)]
pub struct SyscallTable {
    names: BTreeMap<u32, &'static str>,
}

impl SyscallTable {
    /// Build a table from ordered pairs. A repeated number keeps the name
    /// from its last occurrence.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'static str)>,
    {
        let mut names = BTreeMap::new();
        for (number, name) in entries {
            if let Some(previous) = names.insert(number, name) {
                log::debug!("syscall {number}: {previous} replaced by {name}");
            }
        }
        Self { names }
    }

    /// Name registered for `number`, if any.
    pub fn get(&self, number: u32) -> Option<&'static str> {
        self.names.get(&number).copied()
    }

    /// Number of distinct syscall numbers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entries in ascending syscall number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &'static str)> + '_ {
        self.names.iter().map(|(number, name)| (*number, *name))
    }
}

static SYSCALLS: Lazy<SyscallTable> =
    Lazy::new(|| SyscallTable::from_entries(SYSCALL_ENTRIES.iter().copied()));

/// Process-wide table built from [`SYSCALL_ENTRIES`] on first use.
pub fn syscall_table() -> &'static SyscallTable {
    &SYSCALLS
}

/// Resolve a raw syscall number. Values outside the `u32` range are misses.
pub fn lookup(number: i64) -> Option<&'static str> {
    u32::try_from(number)
        .ok()
        .and_then(|number| syscall_table().get(number))
}

/// Display form of a syscall number for trace output.
pub fn symbolize(number: i64) -> String {
    match lookup(number) {
        Some(name) => name.to_owned(),
        None => format!("unknown syscall {number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_duplicate_replaces_earlier() {
        let table = SyscallTable::from_entries([(7, "a.dll!First"), (7, "b.dll!Second")]);
        assert_eq!(table.get(7), Some("b.dll!Second"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_table_misses() {
        let table = SyscallTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn iterates_in_number_order() {
        let table = SyscallTable::from_entries([(9, "x!C"), (1, "x!A"), (4, "x!B")]);
        let numbers: Vec<u32> = table.iter().map(|(number, _)| number).collect();
        assert_eq!(numbers, vec![1, 4, 9]);
    }

    #[test]
    fn symbolize_reports_unknown_numbers() {
        assert_eq!(symbolize(25), "ntdll.dll!NtClose");
        assert_eq!(symbolize(-3), "unknown syscall -3");
    }
}
