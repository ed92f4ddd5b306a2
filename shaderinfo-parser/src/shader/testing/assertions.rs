//! Layout assertions

use crate::shader::ast::{ArraySize, Layout, LayoutType, Variable};

pub struct LayoutsAssertion<'a> {
    pub(crate) layouts: &'a [Layout],
}

impl<'a> LayoutsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        let actual = self.layouts.len();
        assert_eq!(
            actual, expected,
            "Expected {} layouts, found {}: {:#?}",
            expected, actual, self.layouts
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.count(0)
    }

    pub fn layout<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(LayoutAssertion<'a>),
    {
        let layout = self.layouts.get(index).unwrap_or_else(|| {
            panic!(
                "Layout index {} out of bounds ({} layouts)",
                index,
                self.layouts.len()
            )
        });
        check(LayoutAssertion {
            layout,
            context: format!("layouts[{}] `{}`", index, layout.name),
        });
        self
    }
}

pub struct LayoutAssertion<'a> {
    pub(crate) layout: &'a Layout,
    pub(crate) context: String,
}

impl<'a> LayoutAssertion<'a> {
    pub fn layout_type(self, expected: LayoutType) -> Self {
        assert_eq!(
            self.layout.layout_type, expected,
            "{}: Expected type {:?}, found {:?}",
            self.context, expected, self.layout.layout_type
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.layout.name, expected,
            "{}: Expected name '{}', found '{}'",
            self.context, expected, self.layout.name
        );
        self
    }

    pub fn type_qualifier(self, expected: &str) -> Self {
        assert_eq!(
            self.layout.type_qualifier, expected,
            "{}: Expected type qualifier '{}', found '{}'",
            self.context, expected, self.layout.type_qualifier
        );
        self
    }

    pub fn instance_name(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.layout.instance_name.as_deref(),
            expected,
            "{}: Unexpected instance name",
            self.context
        );
        self
    }

    pub fn option(self, key: &str, expected: i32) -> Self {
        match self.layout.options.get(key) {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected option {} = {}, found {}",
                self.context, key, expected, actual
            ),
            None => panic!("{}: Missing option '{}'", self.context, key),
        }
        self
    }

    pub fn no_option(self, key: &str) -> Self {
        assert!(
            !self.layout.options.contains_key(key),
            "{}: Unexpected option '{}'",
            self.context,
            key
        );
        self
    }

    pub fn option_count(self, expected: usize) -> Self {
        assert_eq!(
            self.layout.options.iter().count(),
            expected,
            "{}: Expected {} options, found {:?}",
            self.context,
            expected,
            self.layout.options
        );
        self
    }

    pub fn memory_qualifiers(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.layout.memory_qualifiers, expected,
            "{}: Unexpected memory qualifiers",
            self.context
        );
        self
    }

    pub fn member_count(self, expected: usize) -> Self {
        let actual = self.layout.body.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} members, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn member<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(VariableAssertion<'a>),
    {
        let variable = self.layout.body.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Member index {} out of bounds ({} members)",
                self.context,
                index,
                self.layout.body.len()
            )
        });
        check(VariableAssertion {
            variable,
            context: format!("{}.body[{}]", self.context, index),
        });
        self
    }
}

pub struct VariableAssertion<'a> {
    pub(crate) variable: &'a Variable,
    pub(crate) context: String,
}

impl<'a> VariableAssertion<'a> {
    pub fn type_name(self, expected: &str) -> Self {
        assert_eq!(
            self.variable.type_name, expected,
            "{}: Expected member type '{}', found '{}'",
            self.context, expected, self.variable.type_name
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.variable.name, expected,
            "{}: Expected member name '{}', found '{}'",
            self.context, expected, self.variable.name
        );
        self
    }

    pub fn scalar(self) -> Self {
        self.size(ArraySize::Scalar)
    }

    pub fn fixed(self, expected: i32) -> Self {
        self.size(ArraySize::Fixed(expected))
    }

    pub fn unsized_array(self) -> Self {
        self.size(ArraySize::Unsized)
    }

    fn size(self, expected: ArraySize) -> Self {
        assert_eq!(
            self.variable.size(),
            expected,
            "{}: Unexpected array size",
            self.context
        );
        self
    }
}
