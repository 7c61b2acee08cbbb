//! Built-in style names

pub(super) const STYLES: &[&str] = &[
    "abap",
    "algol",
    "algol_nu",
    "arduino",
    "autumn",
    "borland",
    "bw",
    "colorful",
    "default",
    "dracula",
    "emacs",
    "friendly",
    "friendly_grayscale",
    "fruity",
    "github-dark",
    "gruvbox-dark",
    "gruvbox-light",
    "igor",
    "inkpot",
    "lightbulb",
    "lilypond",
    "lovelace",
    "manni",
    "material",
    "monokai",
    "murphy",
    "native",
    "nord",
    "nord-darker",
    "one-dark",
    "paraiso-dark",
    "paraiso-light",
    "pastie",
    "perldoc",
    "rainbow_dash",
    "rrt",
    "sas",
    "solarized-dark",
    "solarized-light",
    "staroffice",
    "stata-dark",
    "stata-light",
    "tango",
    "trac",
    "vim",
    "vs",
    "xcode",
    "zenburn",
];
