//! ANSI syntax highlighting for JSON and XML output
//!
//! Colors go through `colored`, which honors NO_COLOR, CLICOLOR and CLICOLOR_FORCE.

use colored::{Color, Colorize};

use crate::infrastructure::traits::{Highlighter, Syntax};

/// Colors for each token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub key: Color,
    pub string: Color,
    pub number: Color,
    pub literal: Color,
    pub punctuation: Color,
    pub tag: Color,
    pub attribute: Color,
    pub comment: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

const DEFAULT: Palette = Palette {
    key: Color::Blue,
    string: Color::Red,
    number: Color::Green,
    literal: Color::Green,
    punctuation: Color::White,
    tag: Color::Green,
    attribute: Color::Yellow,
    comment: Color::BrightBlack,
};

const MONOKAI: Palette = Palette {
    key: rgb(0xf9, 0x26, 0x72),
    string: rgb(0xe6, 0xdb, 0x74),
    number: rgb(0xae, 0x81, 0xff),
    literal: rgb(0x66, 0xd9, 0xef),
    punctuation: rgb(0xf8, 0xf8, 0xf2),
    tag: rgb(0xf9, 0x26, 0x72),
    attribute: rgb(0xa6, 0xe2, 0x2e),
    comment: rgb(0x75, 0x71, 0x5e),
};

const SOLARIZED_DARK: Palette = Palette {
    key: rgb(0x26, 0x8b, 0xd2),
    string: rgb(0x2a, 0xa1, 0x98),
    number: rgb(0xd3, 0x36, 0x82),
    literal: rgb(0xcb, 0x4b, 0x16),
    punctuation: rgb(0x93, 0xa1, 0xa1),
    tag: rgb(0x26, 0x8b, 0xd2),
    attribute: rgb(0xb5, 0x89, 0x00),
    comment: rgb(0x58, 0x6e, 0x75),
};

const SOLARIZED_LIGHT: Palette = Palette {
    punctuation: rgb(0x58, 0x6e, 0x75),
    comment: rgb(0x93, 0xa1, 0xa1),
    ..SOLARIZED_DARK
};

const NATIVE: Palette = Palette {
    key: rgb(0x6a, 0xb8, 0x25),
    string: rgb(0xed, 0x9d, 0x13),
    number: rgb(0x36, 0x77, 0xa9),
    literal: rgb(0x6a, 0xb8, 0x25),
    punctuation: rgb(0xd0, 0xd0, 0xd0),
    tag: rgb(0x6a, 0xb8, 0x25),
    attribute: rgb(0xbb, 0xbb, 0xbb),
    comment: rgb(0x99, 0x99, 0x99),
};

/// Theme names understood by [`ThemedHighlighter::from_theme`].
pub const THEMES: &[&str] = &[
    "default",
    "monokai",
    "solarized-dark",
    "solarized-light",
    "native",
    "bw",
];

/// Highlighter coloring tokens from a named palette.
#[derive(Debug, Clone)]
pub struct ThemedHighlighter {
    /// `None` is the monochrome theme: bold keys and tags only.
    palette: Option<Palette>,
}

impl ThemedHighlighter {
    /// Highlighter for a theme name, `None` if the theme is unknown.
    pub fn from_theme(name: &str) -> Option<Self> {
        let palette = match name.to_ascii_lowercase().as_str() {
            "default" => Some(DEFAULT),
            "monokai" => Some(MONOKAI),
            "solarized-dark" | "solarized" => Some(SOLARIZED_DARK),
            "solarized-light" => Some(SOLARIZED_LIGHT),
            "native" => Some(NATIVE),
            "bw" => None,
            _ => return None,
        };
        Some(Self { palette })
    }

    fn paint(&self, token: &str, pick: fn(&Palette) -> Color, emphasize: bool) -> String {
        match &self.palette {
            Some(palette) => token.color(pick(palette)).to_string(),
            None if emphasize => token.bold().to_string(),
            None => token.to_string(),
        }
    }

    fn json(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len() * 2);
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            match c {
                '"' => {
                    let start = i;
                    i += 1;
                    while i < chars.len() {
                        match chars[i] {
                            '\\' => i += 2,
                            '"' => {
                                i += 1;
                                break;
                            }
                            _ => i += 1,
                        }
                    }
                    let end = i.min(chars.len());
                    let token: String = chars[start..end].iter().collect();
                    let is_key = chars[end..].iter().find(|c| !c.is_whitespace()) == Some(&':');
                    if is_key {
                        out.push_str(&self.paint(&token, |p| p.key, true));
                    } else {
                        out.push_str(&self.paint(&token, |p| p.string, false));
                    }
                }
                '-' | '0'..='9' => {
                    let start = i;
                    while i < chars.len()
                        && (chars[i].is_ascii_digit()
                            || matches!(chars[i], '.' | 'e' | 'E' | '+' | '-'))
                    {
                        i += 1;
                    }
                    let token: String = chars[start..i].iter().collect();
                    out.push_str(&self.paint(&token, |p| p.number, false));
                }
                c if c.is_ascii_alphabetic() => {
                    let start = i;
                    while i < chars.len() && chars[i].is_ascii_alphabetic() {
                        i += 1;
                    }
                    let token: String = chars[start..i].iter().collect();
                    out.push_str(&self.paint(&token, |p| p.literal, false));
                }
                '{' | '}' | '[' | ']' | ':' | ',' => {
                    out.push_str(&self.paint(&c.to_string(), |p| p.punctuation, false));
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            }
        }
        out
    }

    fn xml(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        let mut rest = text;
        while let Some(open) = rest.find('<') {
            out.push_str(&rest[..open]);
            rest = &rest[open..];

            let (terminator, pick): (&str, fn(&Palette) -> Color) = if rest.starts_with("<!--") {
                ("-->", |p| p.comment)
            } else if rest.starts_with("<?") {
                ("?>", |p| p.comment)
            } else if rest.starts_with("<![CDATA[") {
                ("]]>", |p| p.string)
            } else {
                let close = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
                out.push_str(&self.tag(&rest[..close]));
                rest = &rest[close..];
                continue;
            };
            let close = rest
                .find(terminator)
                .map(|i| i + terminator.len())
                .unwrap_or(rest.len());
            out.push_str(&self.paint(&rest[..close], pick, false));
            rest = &rest[close..];
        }
        out.push_str(rest);
        out
    }

    /// Color one `<name attr="value" ...>` tag.
    fn tag(&self, tag: &str) -> String {
        let name_end = tag
            .char_indices()
            .skip(1)
            .find(|(i, c)| c.is_whitespace() || *c == '>' || (*c == '/' && *i > 1))
            .map(|(i, _)| i)
            .unwrap_or(tag.len());
        let mut out = self.paint(&tag[..name_end], |p| p.tag, true);

        let mut rest = &tag[name_end..];
        while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix(|c: char| c.is_whitespace()) {
                out.push_str(&rest[..rest.len() - stripped.len()]);
                rest = stripped;
            } else if rest.starts_with('"') || rest.starts_with('\'') {
                let quote = &rest[..1];
                let close = rest[1..].find(quote).map(|i| i + 2).unwrap_or(rest.len());
                out.push_str(&self.paint(&rest[..close], |p| p.string, false));
                rest = &rest[close..];
            } else if rest.starts_with("/>") || rest.starts_with('>') || rest.starts_with('=') {
                let len = if rest.starts_with("/>") { 2 } else { 1 };
                let pick: fn(&Palette) -> Color = if rest.starts_with('=') {
                    |p| p.punctuation
                } else {
                    |p| p.tag
                };
                out.push_str(&self.paint(&rest[..len], pick, true));
                rest = &rest[len..];
            } else {
                let end = rest
                    .find(|c: char| c.is_whitespace() || c == '=' || c == '>' || c == '/')
                    .unwrap_or(rest.len())
                    .max(1);
                out.push_str(&self.paint(&rest[..end], |p| p.attribute, false));
                rest = &rest[end..];
            }
        }
        out
    }
}

impl Highlighter for ThemedHighlighter {
    fn highlight(&self, text: &str, syntax: Syntax) -> String {
        match syntax {
            Syntax::Json => self.json(text),
            Syntax::Xml => self.xml(text),
        }
    }
}
