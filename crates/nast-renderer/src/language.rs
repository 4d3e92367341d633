//! Code block language names to highlighter identifiers.

/// Map a language name as shown in the editor to a highlighter identifier.
///
/// Returns `None` for plain text and for languages without a mapping; such
/// blocks are rendered as escaped text.
#[must_use]
pub fn code_language(name: &str) -> Option<&'static str> {
    let id = match name {
        "ABAP" => "abap",
        "Arduino" => "arduino",
        "Bash" | "Shell" => "bash",
        "BASIC" => "basic",
        "C" => "c",
        "Clojure" => "clojure",
        "CoffeeScript" => "coffeescript",
        "C++" => "cpp",
        "C#" => "csharp",
        "CSS" => "css",
        "Dart" => "dart",
        "Diff" => "diff",
        "Docker" => "docker",
        "Elixir" => "elixir",
        "Elm" => "elm",
        "Erlang" => "erlang",
        "Flow" => "flow",
        "Fortran" => "fortran",
        "F#" => "fsharp",
        "Gherkin" => "gherkin",
        "GLSL" => "glsl",
        "Go" => "go",
        "GraphQL" => "graphql",
        "Groovy" => "groovy",
        "Haskell" => "haskell",
        "HTML" | "Markup" | "XML" => "markup",
        "Java" => "java",
        "JavaScript" => "javascript",
        "JSON" => "json",
        "Julia" => "julia",
        "Kotlin" => "kotlin",
        "LaTeX" => "latex",
        "Less" => "less",
        "Lisp" => "lisp",
        "LiveScript" => "livescript",
        "Lua" => "lua",
        "Makefile" => "makefile",
        "Markdown" => "markdown",
        "MATLAB" => "matlab",
        "Nix" => "nix",
        "Objective-C" => "objectivec",
        "OCaml" => "ocaml",
        "Pascal" => "pascal",
        "Perl" => "perl",
        "PHP" => "php",
        "PowerShell" => "powershell",
        "Prolog" => "prolog",
        "Protobuf" => "protobuf",
        "Python" => "python",
        "R" => "r",
        "Reason" => "reason",
        "Ruby" => "ruby",
        "Rust" => "rust",
        "Sass" => "sass",
        "Scala" => "scala",
        "Scheme" => "scheme",
        "SCSS" => "scss",
        "SQL" => "sql",
        "Swift" => "swift",
        "TypeScript" => "typescript",
        "VB.Net" => "vbnet",
        "Verilog" => "verilog",
        "VHDL" => "vhdl",
        "Visual Basic" => "visual-basic",
        "WebAssembly" => "wasm",
        "YAML" => "yaml",
        _ => return None,
    };
    Some(id)
}
