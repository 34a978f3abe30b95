//! The tree of packages, modules and sources in a workspace.
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{
    lexer::{self, tokens::Lexeme, Lex, LexError, LexFault},
    span::Bytes,
};

/// A single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    path: PathBuf,
    name: String,
    contents: String,
    lexemes: Option<Vec<Lexeme>>,
}

impl Source {
    pub(super) fn new(path: PathBuf, name: String, contents: String) -> Self {
        Self {
            path,
            name,
            contents,
            lexemes: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The lexemes, once [`Source::lex`] has run.
    pub fn lexemes(&self) -> Option<&[Lexeme]> {
        self.lexemes.as_deref()
    }

    /// The text of a lexeme of this source.
    pub fn section(&self, lexeme: &Lexeme) -> &str {
        lexeme.text(&self.contents)
    }

    /// Lexes the contents and attaches the lexemes, followed by an
    /// end-of-file lexeme. Returns the unrecognised runs, which also appear
    /// among the lexemes as error lexemes.
    ///
    /// A source is lexed at most once.
    pub fn lex(&mut self) -> Result<Vec<LexError>, LexFault> {
        if self.lexemes.is_some() {
            return Err(LexFault::AlreadyLexed(self.path.clone()));
        }

        let Lex {
            mut lexemes,
            errors,
        } = lexer::lex(&self.path, &self.contents);
        lexemes.push(Lexeme::end_of_file(Bytes::new(self.contents.len())));

        self.lexemes = Some(lexemes);
        Ok(errors)
    }
}

/// A directory of sources and submodules.
///
/// Only the loader creates modules, and it never keeps one that has no
/// source anywhere below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    sources: BTreeMap<String, Source>,
    submodules: BTreeMap<String, Module>,
}

impl Module {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sources: BTreeMap::new(),
            submodules: BTreeMap::new(),
        }
    }

    pub(super) fn insert_source(&mut self, source: Source) {
        self.sources.insert(source.name.clone(), source);
    }

    pub(super) fn insert_submodule(&mut self, submodule: Module) {
        self.submodules.insert(submodule.name.clone(), submodule);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sources directly in this module, not in its submodules.
    pub fn sources(&self) -> &BTreeMap<String, Source> {
        &self.sources
    }

    pub fn submodules(&self) -> &BTreeMap<String, Module> {
        &self.submodules
    }

    /// Number of sources in this module and all of its submodules.
    pub fn count_sources(&self) -> usize {
        self.submodules
            .values()
            .map(Module::count_sources)
            .fold(self.sources.len(), |total, count| total + count)
    }

    fn collect_sources<'m>(&'m self, into: &mut Vec<&'m Source>) {
        into.extend(self.sources.values());
        for submodule in self.submodules.values() {
            submodule.collect_sources(into);
        }
    }

    fn collect_sources_mut<'m>(&'m mut self, into: &mut Vec<&'m mut Source>) {
        into.extend(self.sources.values_mut());
        for submodule in self.submodules.values_mut() {
            submodule.collect_sources_mut(into);
        }
    }
}

/// A top level unit of a workspace: a module tree or a lone source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Package {
    Module(Module),
    Source(Source),
}

impl Package {
    /// The package is named after its contents.
    pub fn name(&self) -> &str {
        match self {
            Package::Module(module) => module.name(),
            Package::Source(source) => source.name(),
        }
    }

    pub fn count_sources(&self) -> usize {
        match self {
            Package::Module(module) => module.count_sources(),
            Package::Source(_) => 1,
        }
    }

    /// Every source of the package, depth first.
    pub fn sources(&self) -> Vec<&Source> {
        match self {
            Package::Module(module) => {
                let mut sources = vec![];
                module.collect_sources(&mut sources);
                sources
            }
            Package::Source(source) => vec![source],
        }
    }

    pub fn sources_mut(&mut self) -> Vec<&mut Source> {
        match self {
            Package::Module(module) => {
                let mut sources = vec![];
                module.collect_sources_mut(&mut sources);
                sources
            }
            Package::Source(source) => vec![source],
        }
    }
}

/// All the packages found under a workspace directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Workspace {
    packages: BTreeMap<String, Package>,
}

impl Workspace {
    pub(super) fn packages_mut(&mut self) -> &mut BTreeMap<String, Package> {
        &mut self.packages
    }

    pub fn packages(&self) -> &BTreeMap<String, Package> {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn count_sources(&self) -> usize {
        self.packages.values().map(Package::count_sources).sum()
    }

    pub fn sources(&self) -> Vec<&Source> {
        self.packages.values().flat_map(Package::sources).collect()
    }

    pub fn sources_mut(&mut self) -> Vec<&mut Source> {
        self.packages
            .values_mut()
            .flat_map(Package::sources_mut)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::tokens::{Keyword, LexemeKind};

    use super::*;

    fn source(name: &str, contents: &str) -> Source {
        Source::new(
            PathBuf::from(format!("{name}.tr")),
            name.to_string(),
            contents.to_string(),
        )
    }

    fn module(name: &str, sources: &[&str], submodules: Vec<Module>) -> Module {
        let mut module = Module::new(name);
        for name in sources {
            module.insert_source(source(name, ""));
        }
        for submodule in submodules {
            module.insert_submodule(submodule);
        }
        module
    }

    #[test]
    fn lex_attaches_lexemes_and_end_of_file() {
        let mut source = source("Main", "let A @");

        let errors = source.lex().unwrap();

        assert_eq!(errors.len(), 1);
        let kinds: Vec<_> = source.lexemes().unwrap().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LexemeKind::Keyword(Keyword::Let),
                LexemeKind::Identifier,
                LexemeKind::Error,
                LexemeKind::EndOfFile,
            ]
        );
        let last = source.lexemes().unwrap().last().unwrap();
        assert_eq!(last.section.start(), Bytes::new(7));
        assert_eq!(source.section(&source.lexemes().unwrap()[1]), "A");
    }

    #[test]
    fn source_is_lexed_once() {
        let mut source = source("Main", "var X");
        source.lex().unwrap();

        assert!(matches!(source.lex(), Err(LexFault::AlreadyLexed(_))));
    }

    #[test]
    fn unlexed_source_has_no_lexemes() {
        assert!(source("Main", "x").lexemes().is_none());
    }

    #[test]
    fn count_sources_is_recursive() {
        let tree = module(
            "Root",
            &["A"],
            vec![module("Sub", &["B", "C"], vec![module("Deep", &["D"], vec![])])],
        );

        assert_eq!(tree.count_sources(), 4);
        assert_eq!(tree.sources().len(), 1);
        assert_eq!(Package::Module(tree).sources().len(), 4);
    }

    #[test]
    fn package_is_named_after_contents() {
        assert_eq!(Package::Source(source("Lone", "")).name(), "Lone");
        assert_eq!(Package::Module(module("Pkg", &["A"], vec![])).name(), "Pkg");
    }

    #[test]
    fn workspace_sources_mut_reaches_every_source() {
        let mut workspace = Workspace::default();
        let package = Package::Module(module("Pkg", &["A"], vec![module("Sub", &["B"], vec![])]));
        workspace
            .packages_mut()
            .insert(package.name().to_string(), package);
        workspace
            .packages_mut()
            .insert("Lone".to_string(), Package::Source(source("Lone", "")));

        for source in workspace.sources_mut() {
            source.lex().unwrap();
        }

        assert_eq!(workspace.count_sources(), 3);
        assert!(workspace
            .sources()
            .iter()
            .all(|source| source.lexemes().is_some()));
    }
}
