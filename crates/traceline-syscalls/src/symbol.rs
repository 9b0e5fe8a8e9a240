// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Split module-qualified syscall symbols for display.
// Author: Lukas Bower

use std::fmt;

/// A `module!function` symbol borrowed from the syscall table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolName<'a> {
    module: Option<&'a str>,
    function: &'a str,
}

impl<'a> SymbolName<'a> {
    /// Split on the first `!`. A name without one has no module.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('!') {
            Some((module, function)) => Self {
                module: Some(module),
                function,
            },
            None => Self {
                module: None,
                function: raw,
            },
        }
    }

    /// Exporting module, e.g. `ntdll.dll`.
    pub fn module(&self) -> Option<&'a str> {
        self.module
    }

    /// Exported stub name, e.g. `NtClose`.
    pub fn function(&self) -> &'a str {
        self.function
    }
}

impl fmt::Display for SymbolName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.module {
            Some(module) => write!(f, "{module}!{}", self.function),
            None => f.write_str(self.function),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_module_and_function() {
        let symbol = SymbolName::parse("gdi32.dll!NtGdiDrawStream");
        assert_eq!(symbol.module(), Some("gdi32.dll"));
        assert_eq!(symbol.function(), "NtGdiDrawStream");
        assert_eq!(symbol.to_string(), "gdi32.dll!NtGdiDrawStream");
    }

    #[test]
    fn bare_name_has_no_module() {
        let symbol = SymbolName::parse("NtClose");
        assert_eq!(symbol.module(), None);
        assert_eq!(symbol.function(), "NtClose");
    }
}
