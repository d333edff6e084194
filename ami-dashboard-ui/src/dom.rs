//! web-sys document adapter

use ami_dashboard::dom::{Document, Element};
use ami_dashboard::{DomError, TrustedHtml};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

fn rejected(error: JsValue) -> DomError {
    DomError::Rejected(format!("{:?}", error))
}

/// The page's `window.document`
#[derive(Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }

    /// `true` until `DOMContentLoaded` has fired
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl Document for BrowserDocument {
    type Element = BrowserElement;

    fn element_by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement)
    }

    fn create_element(&self, tag: &str) -> Result<BrowserElement, DomError> {
        self.document
            .create_element(tag)
            .map(BrowserElement)
            .map_err(rejected)
    }

    fn body(&self) -> Option<BrowserElement> {
        self.document.body().map(|body| BrowserElement(body.into()))
    }
}

#[derive(Clone)]
pub struct BrowserElement(web_sys::Element);

impl BrowserElement {
    pub fn inner(&self) -> &web_sys::Element {
        &self.0
    }
}

impl Element for BrowserElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.0.set_attribute(name, value).map_err(rejected)
    }

    fn set_inner_html(&self, html: &TrustedHtml) {
        self.0.set_inner_html(html.as_str());
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.0.append_child(&child.0).map(|_| ()).map_err(rejected)
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<(), DomError> {
        let element = self
            .0
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| DomError::Rejected(format!("<{}> has no style", self.0.tag_name())))?;
        element.style().set_property(name, value).map_err(rejected)
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.0.class_list().add_1(class).map_err(rejected)
    }
}
