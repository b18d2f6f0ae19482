//! Code-generation descriptors.
//!
//! Every node carries a descriptor telling the downstream code generator
//! how to render it. Leaves carry a [`SpanCodeGen`], composites a
//! [`BlockCodeGen`]. The attribute variants exist for ordinary HTML
//! attributes; the tag helper rewriter neutralizes them.

/// How a leaf is rendered.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SpanCodeGen {
    /// Produces no output on its own.
    #[default]
    Null,
    /// Written to the output verbatim.
    Markup,
    /// Evaluated and written as an expression.
    Expression,
    /// Executed as a statement.
    Statement,
    /// An application-relative URL (`~/...`) resolved at render time.
    ResolveUrl,
    /// Literal piece of an HTML attribute value, emitted with its prefix.
    LiteralAttribute {
        /// Text emitted before the value, usually the separating space.
        prefix: String,
        /// Generator of the underlying value, when it is not plain text.
        value_generator: Option<Box<SpanCodeGen>>,
    },
}

impl SpanCodeGen {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, SpanCodeGen::Null)
    }

    /// A literal attribute piece whose value is rendered by `inner`.
    pub fn literal_attribute(prefix: impl Into<String>, inner: Option<SpanCodeGen>) -> Self {
        SpanCodeGen::LiteralAttribute {
            prefix: prefix.into(),
            value_generator: inner.map(Box::new),
        }
    }
}

/// How a composite is rendered.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BlockCodeGen {
    /// Children are rendered independently.
    #[default]
    Null,
    /// An HTML attribute rebuilt as `prefix value suffix`.
    Attribute {
        name: String,
        prefix: String,
        suffix: String,
    },
    /// A dynamic piece of an HTML attribute value (`@expr` inside quotes).
    DynamicAttribute { prefix: String },
    /// An implicit or explicit code expression.
    Expression,
    /// An inline template passed as a delegate.
    Template,
}

impl BlockCodeGen {
    /// Whether this descriptor performs HTML attribute reconstruction.
    #[inline]
    pub fn is_attribute(&self) -> bool {
        matches!(
            self,
            BlockCodeGen::Attribute { .. } | BlockCodeGen::DynamicAttribute { .. }
        )
    }

    #[inline]
    pub fn is_dynamic_attribute(&self) -> bool {
        matches!(self, BlockCodeGen::DynamicAttribute { .. })
    }
}
