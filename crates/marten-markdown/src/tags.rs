//! Per-tag formatting rules.
//!
//! Element names are parsed into [`Tag`] and mapped to a [`TagRule`]. Any
//! name that does not parse is [`TagRule::Passthrough`], so unknown elements
//! still have their content rendered.

use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Every element name the renderer has a rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Tag {
    // Skipped subtrees
    Script,
    Style,
    Noscript,
    Iframe,
    Svg,
    Canvas,

    // Headings
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,

    // Blocks
    P,
    Div,
    Section,
    Article,
    Main,
    Nav,
    Header,
    Footer,
    Aside,
    Blockquote,
    Dl,
    Dt,
    Dd,
    Form,

    // Inline wraps
    Strong,
    B,
    Em,
    I,
    U,
    Code,

    // Transparent inline containers
    Span,
    Label,
    Time,

    // Custom handlers
    Br,
    Hr,
    Head,
    A,
    Img,
    Ul,
    Ol,
    Li,
    Pre,
    Table,
    Button,
    Input,
    Select,
    Textarea,
}

impl Tag {
    /// Look up the tag for an element's local name (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(&name.to_ascii_lowercase()).ok()
    }
}

/// Elements whose output depends on more than a fixed prefix and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// `h1`..`h6`: the prefix depends on the level.
    Heading(usize),
    /// `head`: only `<title>` children render.
    Head,
    /// `a`: link or plain text depending on `href`.
    Anchor,
    /// `img`: `![alt](src)`.
    Image,
    /// `ul`/`ol`: adjust list depth (and ordinal counters when ordered).
    List {
        /// True for `<ol>`.
        ordered: bool,
    },
    /// `li`: indentation plus bullet or ordinal marker.
    ListItem,
    /// `pre`: fenced block with verbatim text.
    Preformatted,
    /// `code`: backticks unless already inside `<pre>`.
    Code,
    /// `table`: pipe table via the table extractor.
    Table,
    /// `button`, `input`, `select`, `textarea`.
    FormControl,
}

/// What the renderer does with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRule {
    /// Ignore the element and its whole subtree.
    Skip,
    /// Render children only.
    Passthrough,
    /// Inline markup around the rendered children.
    Wrap(&'static str, &'static str),
    /// Block separation around the rendered children.
    Block(&'static str, &'static str),
    /// Emit fixed text; children are not visited.
    Leaf(&'static str),
    /// Delegate to a dedicated handler.
    Custom(Handler),
}

impl TagRule {
    /// The rule for an element's local name.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        Tag::from_name(name).map_or(Self::Passthrough, Self::for_tag)
    }

    /// The rule for a known tag.
    #[must_use]
    pub const fn for_tag(tag: Tag) -> Self {
        match tag {
            Tag::Script | Tag::Style | Tag::Noscript | Tag::Iframe | Tag::Svg | Tag::Canvas => {
                Self::Skip
            }

            Tag::H1 => Self::Custom(Handler::Heading(1)),
            Tag::H2 => Self::Custom(Handler::Heading(2)),
            Tag::H3 => Self::Custom(Handler::Heading(3)),
            Tag::H4 => Self::Custom(Handler::Heading(4)),
            Tag::H5 => Self::Custom(Handler::Heading(5)),
            Tag::H6 => Self::Custom(Handler::Heading(6)),

            Tag::P => Self::Block("\n\n", "\n"),
            Tag::Div | Tag::Section | Tag::Article | Tag::Main => Self::Block("\n", ""),
            Tag::Nav | Tag::Header | Tag::Footer | Tag::Aside | Tag::Dl => Self::Block("\n", "\n"),
            Tag::Blockquote => Self::Block("\n\n> ", "\n\n"),
            Tag::Dt => Self::Block("\n**", "**"),
            Tag::Dd => Self::Block("\n  ", ""),
            Tag::Form => Self::Block("\n**Form:**\n", "\n"),

            Tag::Strong | Tag::B => Self::Wrap("**", "**"),
            Tag::Em | Tag::I => Self::Wrap("*", "*"),
            Tag::U => Self::Wrap("_", "_"),

            Tag::Span | Tag::Label | Tag::Time => Self::Passthrough,

            Tag::Br => Self::Leaf("  \n"),
            Tag::Hr => Self::Leaf("\n\n---\n\n"),

            Tag::Head => Self::Custom(Handler::Head),
            Tag::A => Self::Custom(Handler::Anchor),
            Tag::Img => Self::Custom(Handler::Image),
            Tag::Ul => Self::Custom(Handler::List { ordered: false }),
            Tag::Ol => Self::Custom(Handler::List { ordered: true }),
            Tag::Li => Self::Custom(Handler::ListItem),
            Tag::Pre => Self::Custom(Handler::Preformatted),
            Tag::Code => Self::Custom(Handler::Code),
            Tag::Table => Self::Custom(Handler::Table),
            Tag::Button | Tag::Input | Tag::Select | Tag::Textarea => {
                Self::Custom(Handler::FormControl)
            }
        }
    }
}
