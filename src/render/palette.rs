//! Terminal color palettes.

/// Marker and control sequences emitted around each page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Starts a title line.
    pub heading: &'static str,
    /// Follows the title underline.
    pub heading_end: &'static str,
    /// Prefix of a description line.
    pub description: &'static str,
    /// Prefix of a note (bullet) line.
    pub note: &'static str,
    /// Prefix of an example line.
    pub example: &'static str,
    /// Terminates an example line.
    pub example_end: &'static str,
    /// Accent for runnable example text.
    pub command: &'static str,
    /// Accent for backtick-delimited spans nested inside an example.
    pub emphasis: &'static str,
    /// Underline for `<...>` runs in descriptions.
    pub link: &'static str,
    /// Opens a `{{...}}` placeholder in an example.
    pub placeholder_open: &'static str,
    /// Closes a placeholder; the active example accent follows it.
    pub placeholder_close: &'static str,
    pub reset: &'static str,
}

static ANSI: Palette = Palette {
    heading: "\x1b[1;97m• ",
    heading_end: "\n\x1b[0m",
    description: "\x1b[0;92m► \x1b[0m",
    note: "\x1b[0;91m• \x1b[0m",
    example: "   \x1b[0;92m$ \x1b[0m",
    example_end: "\n\n\x1b[0m",
    command: "\x1b[0;96m",
    emphasis: "\x1b[1;93m",
    link: "\x1b[4;94m",
    placeholder_open: "\x1b[4;94m",
    placeholder_close: "\x1b[0m",
    reset: "\x1b[0m",
};

static PLAIN: Palette = Palette {
    heading: "• ",
    heading_end: "\n",
    description: "► ",
    note: "• ",
    example: "   $ ",
    example_end: "\n\n",
    command: "",
    emphasis: "",
    link: "",
    placeholder_open: "{{",
    placeholder_close: "}}",
    reset: "",
};

impl Palette {
    pub fn ansi() -> &'static Palette {
        &ANSI
    }

    /// Same layout as [`Palette::ansi`] with every escape sequence removed.
    /// Placeholders keep their braces.
    pub fn plain() -> &'static Palette {
        &PLAIN
    }
}
