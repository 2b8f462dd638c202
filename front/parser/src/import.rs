// This file is part of the Vlad language project.
// Copyright (c) 2024–2026 Vlad contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::Statement;
use crate::parser::Parser;
use error::{VladError, VladErrorKind};
use lexer::{Lexer, LexerConfig, TokenType};

/// Files already spliced into the program being parsed, by canonical path.
#[derive(Debug, Clone, Default)]
pub struct ImportState {
    pub lexer_config: LexerConfig,
    already_imported: HashSet<PathBuf>,
}

impl ImportState {
    pub fn new(lexer_config: LexerConfig) -> Self {
        ImportState {
            lexer_config,
            already_imported: HashSet::new(),
        }
    }

    /// Record the entry file so importing it again is a no-op.
    pub fn mark_root(&mut self, path: &Path) {
        if let Ok(canonical) = path.canonicalize() {
            self.already_imported.insert(canonical);
        }
    }
}

/// Look next to the importing file first, then in the working directory.
pub fn resolve_import(path: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    base_dir
        .map(|dir| dir.join(path))
        .into_iter()
        .chain(std::iter::once(PathBuf::from(path)))
        .find(|candidate| candidate.is_file())
}

impl<'a> Parser<'a> {
    /// `import "path";` parses the named file and returns its top-level
    /// statements for splicing.
    pub(crate) fn parse_import(&mut self) -> Result<Vec<Statement>, VladError> {
        let line = self.peek().line;
        self.expect(TokenType::Import, "")?;

        let path = match self.peek_type() {
            TokenType::String(path) => path.clone(),
            _ => {
                return Err(self
                    .error_here(
                        VladErrorKind::ExpectedToken("import path".to_string()),
                        format!("expected a string path after `import`, found {}", self.peek_type()),
                    )
                    .with_code("E2002")
                    .with_help("write `import \"file.vl\";`"));
            }
        };
        self.advance();
        self.expect(TokenType::SemiColon, "after import path")?;

        let importer = self.file.clone();
        let importer_source = self.source;
        let import_error = |kind: VladErrorKind, message: String| {
            let err = VladError::new(kind, message, importer.to_string(), line, 0);
            match importer_source {
                Some(source) => err.with_source_code(source),
                None => err,
            }
        };

        let found = match resolve_import(&path, self.base_dir.as_deref()) {
            Some(found) if !path.trim().is_empty() => found,
            _ => {
                return Err(import_error(
                    VladErrorKind::ImportNotFound(path.clone()),
                    format!("could not find import target `{}`", path),
                )
                .with_code("E3001")
                .with_help("paths are resolved next to the importing file, then in the working directory"));
            }
        };

        let canonical = found.canonicalize().unwrap_or_else(|_| found.clone());
        if !self.imports.already_imported.insert(canonical.clone()) {
            tracing::debug!(path = %canonical.display(), "import already spliced, skipping");
            return Ok(Vec::new());
        }
        tracing::debug!(import = %path, resolved = %canonical.display(), "importing");

        let source = fs::read_to_string(&found).map_err(|e| {
            import_error(
                VladErrorKind::ImportReadFailed(path.clone()),
                format!("failed to read import `{}`", found.display()),
            )
            .with_code("E3002")
            .with_note(e.to_string())
        })?;

        let file = found.display().to_string();
        let tokens = Lexer::new_with_file(&source, file.clone())
            .with_config(self.imports.lexer_config)
            .tokenize()?;
        let program = Parser::new(tokens, file, &mut *self.imports)
            .with_source(&source)
            .with_base_dir(found.parent())
            .parse_program()?;

        Ok(program.statements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::StatementKind;
    use crate::parse_source;
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn parse_path(path: &Path) -> Result<crate::ast::Program, VladError> {
        let source = fs::read_to_string(path).unwrap();
        parse_source(&source, path.to_str().unwrap(), LexerConfig::default())
    }

    #[test]
    fn import_splices_top_level_statements() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "lib.vl", "fun one() -> int { return 1; }\nvar shared = 2;\n");
        let main = write(dir.path(), "main.vl", "import \"lib.vl\";\nprint(one());\n");

        let program = parse_path(&main).unwrap();
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(program.statements[0].kind, StatementKind::Function(_)));
        assert!(matches!(program.statements[1].kind, StatementKind::Var(_)));
        assert!(matches!(program.statements[2].kind, StatementKind::Print(_)));
    }

    #[test]
    fn nested_imports_resolve_relative_to_the_importer() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        write(&dir.path().join("sub"), "inner.vl", "var inner = 1;\n");
        write(&dir.path().join("sub"), "outer.vl", "import \"inner.vl\";\nvar outer = 2;\n");
        let main = write(dir.path(), "main.vl", "import \"sub/outer.vl\";\n");

        let program = parse_path(&main).unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn repeated_and_cyclic_imports_are_spliced_once() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.vl", "import \"b.vl\";\nvar a = 1;\n");
        write(dir.path(), "b.vl", "import \"a.vl\";\nvar b = 2;\n");
        let main = write(dir.path(), "main.vl", "import \"a.vl\";\nimport \"b.vl\";\nimport \"main.vl\";\n");

        let program = parse_path(&main).unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn missing_import_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let main = write(dir.path(), "main.vl", "var x = 1;\nimport \"nope.vl\";\n");

        let err = parse_path(&main).unwrap_err();
        assert_eq!(err.kind, VladErrorKind::ImportNotFound("nope.vl".into()));
        assert_eq!(err.line, 2);
    }

    #[test]
    fn errors_inside_imports_name_the_imported_file() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.vl", "var = ;\n");
        let main = write(dir.path(), "main.vl", "import \"bad.vl\";\n");

        let err = parse_path(&main).unwrap_err();
        assert_eq!(err.file, bad.display().to_string());
    }
}
