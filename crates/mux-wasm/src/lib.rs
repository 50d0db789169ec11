//! WebAssembly bindings for trie-mux
//!
//! Handlers are plain JS functions. Binding the router to `popstate` and
//! `history.pushState` is left to the JavaScript side, which calls
//! `dispatch` with `location.pathname`.

use js_sys::{Function, Object, Reflect};
use mux_core::{Params, RouteError, Router, RouterBuilder};
use wasm_bindgen::prelude::*;

fn to_js_error(err: RouteError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn params_object(params: &Params) -> Object {
    let object = Object::new();
    for (name, value) in params.iter() {
        let _ = Reflect::set(&object, &name.into(), &value.into());
    }
    object
}

#[wasm_bindgen]
pub struct Mux {
    builder: Option<RouterBuilder<Function>>,
    router: Option<Router<Function>>,
}

impl Default for Mux {
    fn default() -> Self {
        Self::new()
    }
}

impl Mux {
    fn building(&mut self) -> Result<&mut RouterBuilder<Function>, JsValue> {
        self.builder
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Cannot change routes after initialization"))
    }

    fn ready(&self) -> Result<&Router<Function>, JsValue> {
        self.router
            .as_ref()
            .ok_or_else(|| JsValue::from_str("init must be called before dispatching"))
    }
}

#[wasm_bindgen]
impl Mux {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Mux {
        Mux {
            builder: Some(RouterBuilder::new()),
            router: None,
        }
    }

    pub fn route(&mut self, path: &str, handler: Function) -> Result<(), JsValue> {
        self.building()?.route(path, handler).map_err(to_js_error)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = notFound)]
    pub fn not_found(&mut self, handler: Function) -> Result<(), JsValue> {
        self.building()?.not_found(handler);
        Ok(())
    }

    /// Seal the route table. Routes cannot be added afterwards.
    pub fn init(&mut self) -> Result<(), JsValue> {
        if !self.building()?.has_not_found() {
            return Err(JsValue::from_str("notFound must be called before init"));
        }

        let builder = self
            .builder
            .take()
            .ok_or_else(|| JsValue::from_str("Already initialized"))?;
        self.router = Some(builder.build().map_err(to_js_error)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = isInitialized)]
    pub fn is_initialized(&self) -> bool {
        self.router.is_some()
    }

    /// Call the handler for `path` with its params and return the result.
    pub fn dispatch(&self, path: &str) -> Result<JsValue, JsValue> {
        let resolved = self.ready()?.resolve(path).map_err(to_js_error)?;
        if !resolved.matched {
            web_sys::console::debug_1(&JsValue::from_str(&format!("trie-mux: no route for {path}")));
        }
        resolved
            .handler
            .call1(&JsValue::NULL, &params_object(&resolved.params))
    }

    /// Resolve `path` without calling anything: `{ params, matched }`.
    #[wasm_bindgen(js_name = matchPath)]
    pub fn match_path(&self, path: &str) -> Result<JsValue, JsValue> {
        let resolved = self.ready()?.resolve(path).map_err(to_js_error)?;
        let result = Object::new();
        let _ = Reflect::set(&result, &"params".into(), &params_object(&resolved.params));
        let _ = Reflect::set(&result, &"matched".into(), &JsValue::from(resolved.matched));
        Ok(result.into())
    }
}
