use enum_bridge::{BaseClass, EnumError, EnumRuntime, initialize, is_initialized};
use pyo3::{
    exceptions::{PyAttributeError, PyTypeError},
    prelude::*,
};

#[test]
fn initialize_resolves_all_base_classes() {
    Python::attach(|py| {
        initialize(py).unwrap();
        assert!(is_initialized(py));

        let rt = EnumRuntime::get(py).unwrap();
        let enum_mod = py.import("enum").unwrap();
        for (base, name) in [
            (BaseClass::Enum, "Enum"),
            (BaseClass::IntEnum, "IntEnum"),
            (BaseClass::Flag, "Flag"),
            (BaseClass::IntFlag, "IntFlag"),
        ] {
            assert!(rt.base_class(py, base).is(&enum_mod.getattr(name).unwrap()), "{name}");
        }
    });
}

#[test]
fn initialize_twice_keeps_the_first_state() {
    Python::attach(|py| {
        initialize(py).unwrap();
        let first: *const EnumRuntime = EnumRuntime::get(py).unwrap();
        initialize(py).unwrap();
        let second: *const EnumRuntime = EnumRuntime::get(py).unwrap();
        assert_eq!(first, second);
    });
}

#[test]
fn missing_base_class_fails_to_load() {
    Python::attach(|py| {
        let facility = PyModule::from_code(
            py,
            c"class Enum: pass\nclass IntEnum: pass\nclass Flag: pass\n",
            c"partial_enum.py",
            c"partial_enum",
        )
        .unwrap();

        let err = EnumRuntime::load(&facility).unwrap_err();
        let EnumError::InitializationFailure(err) = err else {
            panic!("expected InitializationFailure, got {err:?}");
        };
        assert!(err.is_instance_of::<PyAttributeError>(py));
    });
}

#[test]
fn base_class_must_be_a_class() {
    Python::attach(|py| {
        let facility = PyModule::from_code(
            py,
            c"class Enum: pass\nIntEnum = 1\nclass Flag: pass\nclass IntFlag: pass\n",
            c"odd_enum.py",
            c"odd_enum",
        )
        .unwrap();

        let err = EnumRuntime::load(&facility).unwrap_err();
        let EnumError::InitializationFailure(err) = err else {
            panic!("expected InitializationFailure, got {err:?}");
        };
        assert!(err.is_instance_of::<PyTypeError>(py));
    });
}
