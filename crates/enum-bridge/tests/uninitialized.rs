//! Runs in its own test binary so that nothing initializes enum support first.

use enum_bridge::{
    EnumError, EnumFlavor, EnumTypeDescriptor, MemberCursor, MemberEntry, ScopeId, TypeModule, create_enum,
    is_enum, is_flag, is_initialized, reverse_lookup,
};
use pyo3::{exceptions::PyRuntimeError, prelude::*};

struct NoScopes;

impl TypeModule for NoScopes {
    fn module_name(&self) -> &'static str {
        "pkg"
    }

    fn scope_qualname(&self, _py: Python<'_>, _scope: ScopeId) -> PyResult<String> {
        Ok(String::new())
    }

    fn materialize_scope(&self, _py: Python<'_>, _scope: Option<ScopeId>) -> PyResult<()> {
        Ok(())
    }
}

#[test]
fn operations_before_initialize() {
    static MODE: EnumTypeDescriptor = EnumTypeDescriptor::new("Mode", EnumFlavor::Plain, 1, None, None);
    static TABLE: [MemberEntry; 1] = [MemberEntry::new("ON", 1)];

    Python::attach(|py| {
        assert!(!is_initialized(py));

        let mut cursor = MemberCursor::new(&TABLE);
        let err = create_enum(py, &NoScopes, &MODE, &mut cursor).unwrap_err();
        assert!(matches!(err, EnumError::NotInitialized), "{err:?}");
        assert_eq!(cursor.position(), 0);
        assert!(PyErr::from(err).is_instance_of::<PyRuntimeError>(py));

        let foreign = py
            .eval(c"__import__('enum').Flag('Foreign', {'A': 1}).A", None, None)
            .unwrap();
        assert!(!is_flag(&foreign));
        assert!(!is_enum(&foreign));
        assert!(reverse_lookup(&foreign).is_none());
    });
}
