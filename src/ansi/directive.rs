//! Escape-code fragments and the 256-color / true-color encoders.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};

/// Control Sequence Introducer prefix shared by every directive
pub const CSI: &str = "\x1b[";

/// What a directive changes when it is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Foreground,
    Background,
    Style,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveKind::Foreground => write!(f, "foreground"),
            DirectiveKind::Background => write!(f, "background"),
            DirectiveKind::Style => write!(f, "style"),
        }
    }
}

/// A single SGR escape fragment such as `ESC[31m`.
///
/// Directives are immutable values; composing several of them is plain
/// string concatenation. Displaying a directive writes its raw escape code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    kind: DirectiveKind,
    code: Cow<'static, str>,
}

impl Directive {
    /// Build a directive from a static escape code (used for the palette constants)
    pub const fn from_static(kind: DirectiveKind, code: &'static str) -> Self {
        Self {
            kind,
            code: Cow::Borrowed(code),
        }
    }

    fn owned(kind: DirectiveKind, code: String) -> Self {
        Self {
            kind,
            code: Cow::Owned(code),
        }
    }

    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// Raw escape code
    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for Directive {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

/// Narrow an encoder input to a byte, rejecting anything above 255
fn channel(name: &'static str, value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidArgument { name, value })
}

/// Foreground color from the 256-color palette (`ESC[38;5;Nm`)
pub fn color256(code: u32) -> Result<Directive> {
    let code = channel("code", code)?;
    Ok(Directive::owned(
        DirectiveKind::Foreground,
        format!("{CSI}38;5;{code}m"),
    ))
}

/// Background color from the 256-color palette (`ESC[48;5;Nm`)
pub fn bg256(code: u32) -> Result<Directive> {
    let code = channel("code", code)?;
    Ok(Directive::owned(
        DirectiveKind::Background,
        format!("{CSI}48;5;{code}m"),
    ))
}

/// 24-bit foreground color (`ESC[38;2;R;G;Bm`)
pub fn rgb(r: u32, g: u32, b: u32) -> Result<Directive> {
    let (r, g, b) = (channel("r", r)?, channel("g", g)?, channel("b", b)?);
    Ok(Directive::owned(
        DirectiveKind::Foreground,
        format!("{CSI}38;2;{r};{g};{b}m"),
    ))
}

/// 24-bit background color (`ESC[48;2;R;G;Bm`)
pub fn bg_rgb(r: u32, g: u32, b: u32) -> Result<Directive> {
    let (r, g, b) = (channel("r", r)?, channel("g", g)?, channel("b", b)?);
    Ok(Directive::owned(
        DirectiveKind::Background,
        format!("{CSI}48;2;{r};{g};{b}m"),
    ))
}
