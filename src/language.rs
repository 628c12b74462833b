//! Separator profiles for source-code and markup languages.
//!
//! Each profile lists regex patterns from most structural (definitions, headings)
//! to most granular, ending with the empty separator so splitting always has a
//! character-level fallback. The table is static data and safe to read from any
//! thread.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::Result;

/// Languages with a built-in separator profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Go,
    Java,
    Kotlin,
    Js,
    Ts,
    Php,
    Proto,
    Python,
    Rst,
    Ruby,
    Rust,
    Scala,
    Swift,
    Markdown,
    Latex,
    Html,
    CSharp,
    Sol,
    Cobol,
}

const CPP: &[&str] = &[
    "\nclass ", "\nvoid ", "\nint ", "\nfloat ", "\ndouble ", "\nif ", "\nfor ", "\nwhile ",
    "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const GO: &[&str] = &[
    "\nfunc ", "\nvar ", "\nconst ", "\ntype ", "\nif ", "\nfor ", "\nswitch ", "\ncase ", "\n\n",
    "\n", " ", "",
];

const JAVA: &[&str] = &[
    "\nclass ", "\npublic ", "\nprotected ", "\nprivate ", "\nstatic ", "\nif ", "\nfor ",
    "\nwhile ", "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const KOTLIN: &[&str] = &[
    "\nclass ", "\npublic ", "\nprotected ", "\nprivate ", "\ninternal ", "\ncompanion ",
    "\nfun ", "\nval ", "\nvar ", "\nif ", "\nfor ", "\nwhile ", "\nwhen ", "\ncase ",
    "\nelse ", "\n\n", "\n", " ", "",
];

const JS: &[&str] = &[
    "\nfunction ", "\nconst ", "\nlet ", "\nvar ", "\nclass ", "\nif ", "\nfor ", "\nwhile ",
    "\nswitch ", "\ncase ", "\ndefault ", "\n\n", "\n", " ", "",
];

const TS: &[&str] = &[
    "\nenum ", "\ninterface ", "\nnamespace ", "\ntype ", "\nclass ", "\nfunction ",
    "\nconst ", "\nlet ", "\nvar ", "\nif ", "\nfor ", "\nwhile ", "\nswitch ", "\ncase ",
    "\ndefault ", "\n\n", "\n", " ", "",
];

const PHP: &[&str] = &[
    "\nfunction ", "\nclass ", "\nif ", "\nforeach ", "\nwhile ", "\ndo ", "\nswitch ",
    "\ncase ", "\n\n", "\n", " ", "",
];

const PROTO: &[&str] = &[
    "\nmessage ", "\nservice ", "\nenum ", "\noption ", "\nimport ", "\nsyntax ", "\n\n", "\n",
    " ", "",
];

const PYTHON: &[&str] = &["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""];

const RST: &[&str] = &[
    "\n=+\n", "\n-+\n", "\n\\*+\n", "\n\n\\.\\. *\n\n", "\n\n", "\n", " ", "",
];

const RUBY: &[&str] = &[
    "\ndef ", "\nclass ", "\nif ", "\nunless ", "\nwhile ", "\nfor ", "\ndo ", "\nbegin ",
    "\nrescue ", "\n\n", "\n", " ", "",
];

const RUST: &[&str] = &[
    "\nfn ", "\nconst ", "\nlet ", "\nif ", "\nwhile ", "\nfor ", "\nloop ", "\nmatch ", "\n\n",
    "\n", " ", "",
];

const SCALA: &[&str] = &[
    "\nclass ", "\nobject ", "\ndef ", "\nval ", "\nvar ", "\nif ", "\nfor ", "\nwhile ",
    "\nmatch ", "\ncase ", "\n\n", "\n", " ", "",
];

const SWIFT: &[&str] = &[
    "\nfunc ", "\nclass ", "\nstruct ", "\nenum ", "\nif ", "\nfor ", "\nwhile ", "\ndo ",
    "\nswitch ", "\ncase ", "\n\n", "\n", " ", "",
];

const MARKDOWN: &[&str] = &[
    "\n#{1,6} ",
    "```\n",
    "\n\\*\\*\\*+\n",
    "\n---+\n",
    "\n___+\n",
    "\n\n",
    "\n",
    " ",
    "",
];

const LATEX: &[&str] = &[
    "\n\\\\chapter\\{",
    "\n\\\\section\\{",
    "\n\\\\subsection\\{",
    "\n\\\\subsubsection\\{",
    "\n\\\\begin\\{enumerate\\}",
    "\n\\\\begin\\{itemize\\}",
    "\n\\\\begin\\{description\\}",
    "\n\\\\begin\\{list\\}",
    "\n\\\\begin\\{quote\\}",
    "\n\\\\begin\\{quotation\\}",
    "\n\\\\begin\\{verse\\}",
    "\n\\\\begin\\{verbatim\\}",
    "\n\\\\begin\\{align\\}",
    "\\$\\$",
    "\\$",
    " ",
    "",
];

const HTML: &[&str] = &[
    "<body", "<div", "<p", "<br", "<li", "<h1", "<h2", "<h3", "<h4", "<h5", "<h6", "<span",
    "<table", "<tr", "<td", "<th", "<ul", "<ol", "<header", "<footer", "<nav", "<head",
    "<style", "<script", "<meta", "<title", "",
];

const CSHARP: &[&str] = &[
    "\ninterface ", "\nenum ", "\nimplements ", "\ndelegate ", "\nevent ", "\nclass ",
    "\nabstract ", "\npublic ", "\nprotected ", "\nprivate ", "\nstatic ", "\nreturn ",
    "\nif ", "\ncontinue ", "\nfor ", "\nforeach ", "\nwhile ", "\nswitch ", "\nbreak ",
    "\ncase ", "\nelse ", "\ntry ", "\nthrow ", "\nfinally ", "\ncatch ", "\n\n", "\n", " ", "",
];

const SOL: &[&str] = &[
    "\npragma ", "\nusing ", "\ncontract ", "\ninterface ", "\nlibrary ", "\nconstructor ",
    "\ntype ", "\nfunction ", "\nevent ", "\nmodifier ", "\nerror ", "\nstruct ", "\nenum ",
    "\nif ", "\nfor ", "\nwhile ", "\ndo while ", "\nassembly ", "\n\n", "\n", " ", "",
];

const COBOL: &[&str] = &[
    "\nIDENTIFICATION DIVISION\\.",
    "\nENVIRONMENT DIVISION\\.",
    "\nDATA DIVISION\\.",
    "\nPROCEDURE DIVISION\\.",
    "\nWORKING-STORAGE SECTION\\.",
    "\nLINKAGE SECTION\\.",
    "\nFILE SECTION\\.",
    "\nINPUT-OUTPUT SECTION\\.",
    "\nOPEN ",
    "\nCLOSE ",
    "\nREAD ",
    "\nWRITE ",
    "\nIF ",
    "\nELSE ",
    "\nMOVE ",
    "\nPERFORM ",
    "\nUNTIL ",
    "\nVARYING ",
    "\nACCEPT ",
    "\nDISPLAY ",
    "\nSTOP RUN\\.",
    "\n",
    " ",
    "",
];

impl Language {
    /// Every language with a profile
    pub const ALL: [Language; 20] = [
        Language::Cpp,
        Language::Go,
        Language::Java,
        Language::Kotlin,
        Language::Js,
        Language::Ts,
        Language::Php,
        Language::Proto,
        Language::Python,
        Language::Rst,
        Language::Ruby,
        Language::Rust,
        Language::Scala,
        Language::Swift,
        Language::Markdown,
        Language::Latex,
        Language::Html,
        Language::CSharp,
        Language::Sol,
        Language::Cobol,
    ];

    /// Canonical identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Java => "java",
            Language::Kotlin => "kotlin",
            Language::Js => "js",
            Language::Ts => "ts",
            Language::Php => "php",
            Language::Proto => "proto",
            Language::Python => "python",
            Language::Rst => "rst",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Scala => "scala",
            Language::Swift => "swift",
            Language::Markdown => "markdown",
            Language::Latex => "latex",
            Language::Html => "html",
            Language::CSharp => "csharp",
            Language::Sol => "sol",
            Language::Cobol => "cobol",
        }
    }

    /// Separator patterns for this language, most structural first.
    ///
    /// The patterns are regular expressions and must be compiled with
    /// `is_separator_regex` enabled.
    pub fn separators(&self) -> &'static [&'static str] {
        match self {
            Language::Cpp => CPP,
            Language::Go => GO,
            Language::Java => JAVA,
            Language::Kotlin => KOTLIN,
            Language::Js => JS,
            Language::Ts => TS,
            Language::Php => PHP,
            Language::Proto => PROTO,
            Language::Python => PYTHON,
            Language::Rst => RST,
            Language::Ruby => RUBY,
            Language::Rust => RUST,
            Language::Scala => SCALA,
            Language::Swift => SWIFT,
            Language::Markdown => MARKDOWN,
            Language::Latex => LATEX,
            Language::Html => HTML,
            Language::CSharp => CSHARP,
            Language::Sol => SOL,
            Language::Cobol => COBOL,
        }
    }

    /// Canonical identifiers of every supported language
    pub fn supported() -> Vec<String> {
        Self::ALL.iter().map(|l| l.as_str().to_string()).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let language = match s.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Language::Cpp,
            "go" | "golang" => Language::Go,
            "java" => Language::Java,
            "kotlin" | "kt" => Language::Kotlin,
            "js" | "javascript" => Language::Js,
            "ts" | "typescript" => Language::Ts,
            "php" => Language::Php,
            "proto" | "protobuf" => Language::Proto,
            "python" | "py" => Language::Python,
            "rst" | "restructuredtext" => Language::Rst,
            "ruby" | "rb" => Language::Ruby,
            "rust" | "rs" => Language::Rust,
            "scala" => Language::Scala,
            "swift" => Language::Swift,
            "markdown" | "md" => Language::Markdown,
            "latex" | "tex" => Language::Latex,
            "html" | "htm" => Language::Html,
            "csharp" | "c#" | "cs" => Language::CSharp,
            "sol" | "solidity" => Language::Sol,
            "cobol" | "cbl" => Language::Cobol,
            _ => {
                return Err(Error::UnsupportedLanguage {
                    language: s.to_string(),
                    supported: Self::supported(),
                })
            }
        };
        Ok(language)
    }
}

/// Look up the separator profile for a language identifier
pub fn resolve_separators_for(language_id: &str) -> Result<Vec<String>> {
    let language: Language = language_id.parse()?;
    Ok(language
        .separators()
        .iter()
        .map(|s| s.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_splitters::Separator;

    #[test]
    fn test_every_profile_compiles_and_ends_with_fallback() {
        for language in Language::ALL {
            let separators = resolve_separators_for(language.as_str()).unwrap();
            assert_eq!(separators.last().map(String::as_str), Some(""), "{}", language);
            Separator::compile_all(&separators, true).unwrap();
        }
    }

    #[test]
    fn test_python_profile() {
        assert_eq!(
            Language::Python.separators(),
            &["\nclass ", "\ndef ", "\n\tdef ", "\n\n", "\n", " ", ""]
        );
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!("JavaScript".parse::<Language>().unwrap(), Language::Js);
        assert_eq!(" c# ".parse::<Language>().unwrap(), Language::CSharp);
        assert_eq!("md".parse::<Language>().unwrap(), Language::Markdown);
    }

    #[test]
    fn test_unsupported_language_lists_supported() {
        let err = resolve_separators_for("klingon").unwrap_err();
        match &err {
            Error::UnsupportedLanguage {
                language,
                supported,
            } => {
                assert_eq!(language, "klingon");
                assert_eq!(supported.len(), Language::ALL.len());
                assert!(supported.contains(&"rust".to_string()));
            }
            other => panic!("expected unsupported language, got {:?}", other),
        }
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn test_serde_identifiers() {
        let language: Language = serde_json::from_str("\"csharp\"").unwrap();
        assert_eq!(language, Language::CSharp);
        assert_eq!(serde_json::to_string(&Language::Js).unwrap(), "\"js\"");
    }
}
