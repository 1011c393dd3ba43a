//! Name-based predicates deciding what a snapshot contains

use super::config::FilterRules;

/// Pure filter over a fixed [`FilterRules`] set.
///
/// All checks are exact matches on a single path component, so a pruned
/// directory is pruned at every depth.
#[derive(Debug, Clone, Default)]
pub struct Filter(FilterRules);

impl Filter {
    pub fn new(rules: FilterRules) -> Self {
        Self(rules)
    }

    pub fn rules(&self) -> &FilterRules {
        &self.0
    }

    /// False iff `dir_name` is an ignored directory name.
    pub fn should_descend(&self, dir_name: &str) -> bool {
        !self.0.ignored_dirs.contains(dir_name)
    }

    /// False iff `file_name` is an ignored file name.
    pub fn should_list_file(&self, file_name: &str) -> bool {
        !self.0.ignored_files.contains(file_name)
    }

    /// True iff the file is listed and its extension (or bare name) is
    /// whitelisted for content inlining.
    pub fn should_include_content(&self, file_name: &str) -> bool {
        if !self.should_list_file(file_name) {
            return false;
        }
        if file_name == self.0.always_include {
            return true;
        }
        extension_of(file_name).is_some_and(|ext| self.0.included_extensions.contains(ext))
    }
}

/// Final dot-segment of `file_name`, including the dot.
///
/// Leading dots belong to the stem, so `.env` and `..` have no extension
/// while `.eslintrc.json` has `.json`.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    let rest = &file_name[stem_start..];
    rest.rfind('.').map(|i| &file_name[stem_start + i..])
}
