// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Validate the built-in traceline syscall table.
// Author: Lukas Bower
#![forbid(unsafe_code)]

use traceline_syscalls::{lookup, syscall_table, SymbolName, SYSCALL_ENTRIES};

#[test]
fn resolves_known_numbers() {
    assert_eq!(lookup(0), Some("ntdll.dll!NtAcceptConnectPort"));
    assert_eq!(lookup(25), Some("ntdll.dll!NtClose"));
    assert_eq!(lookup(4762), Some("gdi32.dll!NtGdiDrawStream"));
}

#[test]
fn absent_numbers_miss() {
    assert_eq!(lookup(-1), None);
    assert_eq!(lookup(999_999), None);
    assert_eq!(lookup(i64::from(u32::MAX) + 1), None);
}

#[test]
fn duplicate_numbers_keep_last_entry() {
    assert_eq!(lookup(4505), Some("user32.dll!NtUserGetImeHotKey"));
    assert_eq!(lookup(4419), Some("user32.dll!NtUserCallOneParam"));
    assert_eq!(lookup(4680), Some("user32.dll!NtUserValidateHandleSecure"));
}

#[test]
fn table_collapses_duplicates() {
    assert_eq!(SYSCALL_ENTRIES.len(), 936);
    assert_eq!(syscall_table().len(), 929);
}

#[test]
fn every_entry_is_module_qualified() {
    for (number, name) in syscall_table().iter() {
        let symbol = SymbolName::parse(name);
        assert!(
            symbol.module().is_some_and(|module| module.ends_with(".dll")),
            "syscall {number} has no module: {name}"
        );
    }
}
