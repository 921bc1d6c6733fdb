//! Translating a whole unit of top-level statements.
//!
//! Top-level nodes share no state, so they can be translated in any order (or
//! concurrently) and reassembled in source order afterwards.

use crate::config::{CodegenConfig, ErrorPolicy};
use crate::ir::Node;
use crate::output::RustWriter;
use crate::traits::TranslateError;
use tracing::{debug, warn};

/// A top-level construct left out of the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    /// Position of the construct in the unit.
    pub index: usize,
    pub error: TranslateError,
}

/// Output of translating a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    pub lines: Vec<String>,
    pub skipped: Vec<Skipped>,
}

impl Translation {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Translate `nodes` in order according to `config`.
///
/// Under [`ErrorPolicy::Abort`] the first failure in source order is returned,
/// regardless of which node finished first on the parallel path.
pub fn translate_unit(
    nodes: &[Node],
    config: &CodegenConfig,
) -> Result<Translation, TranslateError> {
    debug!(
        nodes = nodes.len(),
        parallel = config.parallel,
        "translating unit"
    );

    let results = translate_all(nodes, config.parallel);

    let mut translation = Translation::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(lines) => translation.lines.extend(lines),
            Err(error) => match config.on_error {
                ErrorPolicy::Abort => return Err(error),
                ErrorPolicy::SkipAndReport => {
                    warn!(index, %error, "skipping top-level construct");
                    translation.skipped.push(Skipped { index, error });
                }
            },
        }
    }

    debug!(
        lines = translation.lines.len(),
        skipped = translation.skipped.len(),
        "unit translated"
    );
    Ok(translation)
}

type NodeResult = Result<Vec<String>, TranslateError>;

#[cfg(feature = "parallel")]
fn translate_all(nodes: &[Node], parallel: bool) -> Vec<NodeResult> {
    use rayon::prelude::*;

    if parallel {
        nodes
            .par_iter()
            .map(|node| RustWriter.translate_lines(node))
            .collect()
    } else {
        nodes
            .iter()
            .map(|node| RustWriter.translate_lines(node))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn translate_all(nodes: &[Node], parallel: bool) -> Vec<NodeResult> {
    if parallel {
        debug!("built without the `parallel` feature; translating serially");
    }
    nodes
        .iter()
        .map(|node| RustWriter.translate_lines(node))
        .collect()
}
