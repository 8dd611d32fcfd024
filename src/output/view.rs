//! Output View Tree
//!
//! Immutable description of what a sample does with a response: bind a variable, loop over
//! a collection, print formatted values, or emit a comment. The set of node kinds is
//! closed; anything else fails to deserialize.

use crate::error::ViewError;
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};

/// One node of an output view tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputView {
    Define(DefineView),
    Loop(LoopView),
    Print(PrintView),
    Comment(CommentView),
}

/// Binds `variable` to a value of type `reference`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefineView {
    pub variable: String,
    pub reference: TypeRef,
}

/// Iterates `collection`, binding each element to `variable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopView {
    pub variable: String,
    pub collection: TypeRef,
    #[serde(default)]
    pub body: Vec<OutputView>,
}

/// Prints `format` with its arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintView {
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub args: Vec<PrintArg>,
}

/// One print argument, made of ordered segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintArg {
    pub segments: Vec<ArgSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgSegment {
    Text { text: String },
    Variable(VariableSegment),
}

/// Reference to a previously bound variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSegment {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Set when the variable holds an enum value even if its type says otherwise
    #[serde(default)]
    pub enum_value: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommentView {
    #[serde(default)]
    pub lines: Vec<String>,
}

impl OutputView {
    pub fn define(variable: impl Into<String>, reference: TypeRef) -> Self {
        OutputView::Define(DefineView {
            variable: variable.into(),
            reference,
        })
    }

    /// Loop over `collection`; fails unless it is a collection type
    pub fn for_each(
        variable: impl Into<String>,
        collection: TypeRef,
        body: Vec<OutputView>,
    ) -> Result<Self, ViewError> {
        let view = LoopView {
            variable: variable.into(),
            collection,
            body,
        };
        view.element_type()?;
        Ok(OutputView::Loop(view))
    }

    pub fn print(format: impl Into<String>, args: Vec<PrintArg>) -> Self {
        OutputView::Print(PrintView {
            format: format.into(),
            args,
        })
    }

    pub fn comment<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OutputView::Comment(CommentView {
            lines: lines.into_iter().map(Into::into).collect(),
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            OutputView::Define(_) => "define",
            OutputView::Loop(_) => "loop",
            OutputView::Print(_) => "print",
            OutputView::Comment(_) => "comment",
        }
    }

    /// Check the contract for this node and everything below it.
    pub fn validate(&self) -> Result<(), ViewError> {
        match self {
            OutputView::Loop(view) => {
                view.element_type()?;
                view.body.iter().try_for_each(OutputView::validate)
            }
            OutputView::Define(_) | OutputView::Print(_) | OutputView::Comment(_) => Ok(()),
        }
    }
}

impl LoopView {
    pub fn element_type(&self) -> Result<&TypeRef, ViewError> {
        self.collection
            .element()
            .ok_or_else(|| ViewError::NotACollection {
                variable: self.variable.clone(),
                identity: self.collection.identity().to_string(),
            })
    }
}

impl PrintView {
    /// Variable segments across all arguments, left to right
    pub fn variables(&self) -> impl Iterator<Item = &VariableSegment> {
        self.args
            .iter()
            .flat_map(|arg| arg.segments.iter())
            .filter_map(|segment| match segment {
                ArgSegment::Variable(variable) => Some(variable),
                ArgSegment::Text { .. } => None,
            })
    }
}

impl PrintArg {
    pub fn new(segments: Vec<ArgSegment>) -> Self {
        Self { segments }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![ArgSegment::Text { text: text.into() }])
    }

    pub fn variable(variable: VariableSegment) -> Self {
        Self::new(vec![ArgSegment::Variable(variable)])
    }
}

impl VariableSegment {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            enum_value: false,
        }
    }

    pub fn flagged_enum(mut self) -> Self {
        self.enum_value = true;
        self
    }

    pub fn is_enum(&self) -> bool {
        self.enum_value || self.type_ref.is_enum()
    }
}
