//! Publishes bindings onto the JavaScript global object.
//!
//! Each entry becomes a JS function taking up to three arguments. Missing
//! trailing arguments arrive as `undefined` and are dropped before the call,
//! so `reverseString()` and `reverseString(undefined)` behave the same.
//! Closures are leaked: the host's event loop keeps the module alive and the
//! functions must stay callable for as long as it runs.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::binding::CallableEntry;
use crate::host::{Global, Host, HostError};
use crate::model::config::ShimConfig;
use crate::register_callbacks;
use crate::value::{Args, HostValue, trim_undefined};

type HostFn = dyn Fn(JsValue, JsValue, JsValue) -> Result<JsValue, JsValue>;

pub struct JsHost {
    global: Object,
}

impl JsHost {
    pub fn new() -> Self {
        Self {
            global: js_sys::global(),
        }
    }
}

impl Default for JsHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for JsHost {
    fn publish(&mut self, name: &str, global: Global) -> Result<(), HostError> {
        let key = JsValue::from_str(name);
        let existing = Reflect::get(&self.global, &key).map_err(js_error)?;
        if !existing.is_undefined() {
            return Err(HostError::AlreadyPublished(name.to_string()));
        }

        let value: JsValue = match global {
            Global::Namespace(namespace) => {
                let object = Object::new();
                for entry in namespace.entries() {
                    let entry_key = JsValue::from_str(entry.name());
                    Reflect::set(&object, &entry_key, &to_function(entry.clone()))
                        .map_err(js_error)?;
                }
                object.into()
            }
            Global::Function(entry) => to_function(entry),
        };

        Reflect::set(&self.global, &key, &value).map_err(js_error)?;
        Ok(())
    }
}

/// Entry point run by the host when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = ShimConfig::defaults().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let mut host = JsHost::new();
    register_callbacks(&mut host, &config)
        .map_err(|err| JsValue::from(js_sys::Error::new(&err.to_string())))
}

fn to_function(entry: CallableEntry) -> JsValue {
    let closure = Closure::<HostFn>::new(move |a: JsValue, b: JsValue, c: JsValue| {
        let mut args: Args = [a, b, c].iter().map(from_js).collect();
        trim_undefined(&mut args);

        entry
            .invoke(&args)
            .map(|value| to_js(&value))
            .map_err(|err| js_sys::Error::new(&err.to_string()).into())
    });

    let function = closure.as_ref().clone();
    closure.forget();
    function
}

fn from_js(value: &JsValue) -> HostValue {
    if value.is_undefined() {
        return HostValue::Undefined;
    }
    if value.is_null() {
        return HostValue::Null;
    }
    if let Some(text) = value.as_string() {
        return HostValue::Str(text);
    }
    if let Some(flag) = value.as_bool() {
        return HostValue::Bool(flag);
    }
    if let Some(number) = value.as_f64() {
        return HostValue::from_number(number);
    }
    HostValue::Object
}

fn to_js(value: &HostValue) -> JsValue {
    match value {
        HostValue::Undefined | HostValue::Object => JsValue::UNDEFINED,
        HostValue::Null => JsValue::NULL,
        HostValue::Bool(flag) => JsValue::from_bool(*flag),
        HostValue::Int(number) => JsValue::from_f64(*number as f64),
        HostValue::Float(number) => JsValue::from_f64(*number),
        HostValue::Str(text) => JsValue::from_str(text),
    }
}

fn js_error(err: JsValue) -> HostError {
    HostError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Array, Function};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use crate::binding::{HostFunctions, Namespace};

    fn published(name: &str) -> Object {
        let mut namespace = Namespace::new();
        HostFunctions::register_all(&mut namespace).unwrap();

        let mut host = JsHost::new();
        host.publish(name, Global::Namespace(namespace)).unwrap();
        Reflect::get(&js_sys::global(), &JsValue::from_str(name))
            .unwrap()
            .unchecked_into()
    }

    fn call(object: &Object, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let function: Function = Reflect::get(object, &JsValue::from_str(name))
            .unwrap()
            .unchecked_into();
        let array: Array = args.iter().collect();
        function.apply(&JsValue::UNDEFINED, &array)
    }

    #[wasm_bindgen_test]
    fn numbers_marshal_as_int_or_float() {
        assert_eq!(from_js(&JsValue::from_f64(3.0)), HostValue::Int(3));
        assert_eq!(from_js(&JsValue::from_f64(3.5)), HostValue::Float(3.5));
        assert_eq!(from_js(&JsValue::from_str("3")), HostValue::from("3"));
        assert_eq!(from_js(&JsValue::UNDEFINED), HostValue::Undefined);
        assert_eq!(from_js(&JsValue::NULL), HostValue::Null);
        assert_eq!(from_js(&Object::new().into()), HostValue::Object);
    }

    #[wasm_bindgen_test]
    fn results_marshal_back_to_js() {
        assert_eq!(to_js(&HostValue::Int(7)).as_f64(), Some(7.0));
        assert_eq!(to_js(&HostValue::from("ba")).as_string(), Some("ba".to_string()));
        assert!(to_js(&HostValue::Undefined).is_undefined());
    }

    #[wasm_bindgen_test]
    fn published_functions_are_callable_from_js() {
        let ns = published("hostbindCallable");
        let sum = call(&ns, "add", &[JsValue::from_f64(2.0), JsValue::from_f64(3.0)]).unwrap();
        assert_eq!(sum.as_f64(), Some(5.0));

        let reversed = call(&ns, "reverseString", &[JsValue::from_str("ab")]).unwrap();
        assert_eq!(reversed.as_string(), Some("ba".to_string()));
    }

    #[wasm_bindgen_test]
    fn reverse_string_without_argument_is_empty_in_js() {
        let ns = published("hostbindMissing");
        let none = call(&ns, "reverseString", &[]).unwrap();
        assert_eq!(none.as_string(), Some(String::new()));

        let undefined = call(&ns, "reverseString", &[JsValue::UNDEFINED]).unwrap();
        assert_eq!(undefined.as_string(), Some(String::new()));
    }

    #[wasm_bindgen_test]
    fn call_errors_are_thrown() {
        let ns = published("hostbindThrows");
        let err = call(&ns, "add", &[JsValue::from_f64(1.0)]).unwrap_err();
        let message = err.unchecked_into::<js_sys::Error>().message();
        assert_eq!(
            String::from(message),
            "add: expected 2 argument(s), got 1"
        );
    }

    #[wasm_bindgen_test]
    fn globals_publish_once() {
        let mut host = JsHost::new();
        host.publish("hostbindOnce", Global::Namespace(Namespace::new()))
            .unwrap();
        assert_eq!(
            host.publish("hostbindOnce", Global::Namespace(Namespace::new())),
            Err(HostError::AlreadyPublished("hostbindOnce".to_string()))
        );
    }
}
