use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax};

/// Parse an ES module into an AST without evaluating it.
///
/// Library sources are plain JavaScript, so no TypeScript or JSX syntax is
/// enabled.
pub fn parse_module_source(code: String, file_path: &Path) -> Result<Module> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map: Arc<SourceMap> = Default::default();
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Es(EsSyntax::default());
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path.display(), e.kind()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module() {
        let module = parse_module_source(
            "export const NAME_ALERT = 'BAlert'\nexport const NAME_BADGE = 'BBadge'\n".into(),
            Path::new("components.js"),
        )
        .unwrap();
        assert_eq!(module.body.len(), 2);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_module_source("export const = ;".into(), Path::new("broken.js"))
            .unwrap_err();
        assert!(err.to_string().contains("broken.js"));
    }
}
