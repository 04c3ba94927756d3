//! Console summary of a conversion run.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::models::{Question, ROOT_KEY};

/// Totals printed once a run finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub input: PathBuf,
    /// `None` when nothing was written (dry run or check).
    pub output: Option<PathBuf>,
    pub total: usize,
    /// Question count per category, sorted by name.
    pub categories: BTreeMap<String, usize>,
}

impl Summary {
    pub fn new<'a, I>(input: &Path, output: Option<&Path>, questions: I) -> Self
    where
        I: IntoIterator<Item = &'a Question>,
    {
        let mut categories = BTreeMap::new();
        let mut total = 0;

        for question in questions {
            *categories.entry(question.category.clone()).or_insert(0) += 1;
            total += 1;
        }

        Self {
            input: input.to_path_buf(),
            output: output.map(Path::to_path_buf),
            total,
            categories,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.output {
            Some(_) => writeln!(f, "Conversion complete!")?,
            None => writeln!(f, "Nothing written.")?,
        }
        writeln!(f, "   Input:  {}", self.input.display())?;
        if let Some(output) = &self.output {
            writeln!(f, "   Output: {}", output.display())?;
        }
        writeln!(f, "   Total:  {} question(s)", self.total)?;
        writeln!(f)?;
        writeln!(f, "   Categories found:")?;
        for (category, count) in &self.categories {
            writeln!(f, "     - {}: {} question(s)", category, count)?;
        }

        if let Some(output) = &self.output {
            let file_name = output
                .file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default();
            writeln!(f)?;
            writeln!(f, "   Next steps:")?;
            writeln!(f, "      1. Open the database console")?;
            writeln!(f, "      2. Choose 'Import JSON' on the root node")?;
            writeln!(f, "      3. Select '{}'", file_name)?;
            writeln!(f, "      4. Questions appear under '{}'", ROOT_KEY)?;
        }

        Ok(())
    }
}
