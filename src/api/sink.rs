//! Outlet sink backed by a JavaScript callback
//!
//! Every message becomes `outlet(name, ...args)`, the call shape of a
//! patcher host's outlet function.

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

use crate::renderers::outlets::{OutletSink, OutletValue};
use crate::wasm_error;

pub struct JsOutletSink<'a> {
    outlet: &'a Function,
    failure: Option<JsValue>,
}

impl<'a> JsOutletSink<'a> {
    pub fn new(outlet: &'a Function) -> Self {
        Self {
            outlet,
            failure: None,
        }
    }

    /// First exception thrown by the callback, if any
    pub fn finish(self) -> Result<(), JsValue> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn to_js(value: &OutletValue) -> JsValue {
    match value {
        OutletValue::Int(v) => JsValue::from_f64(*v as f64),
        OutletValue::Float(v) => JsValue::from_f64(*v),
        OutletValue::Text(v) => JsValue::from_str(v),
    }
}

impl OutletSink for JsOutletSink<'_> {
    fn send(&mut self, outlet: &str, args: Vec<OutletValue>) {
        let call_args = Array::new();
        call_args.push(&JsValue::from_str(outlet));
        for arg in &args {
            call_args.push(&to_js(arg));
        }

        if let Err(err) = self.outlet.apply(&JsValue::NULL, &call_args) {
            wasm_error!("outlet callback failed on '{}'", outlet);
            self.failure.get_or_insert(err);
        }
    }
}
