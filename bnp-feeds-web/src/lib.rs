//! bnp-feeds in the browser
//!
//! WASM entry points for the diary pages. Each page loads the module and
//! calls the entry point for its feed once the document is ready:
//!
//! ```js
//! import init, { start_main_feed } from "./bnp_feeds_web.js";
//! await init();
//! start_main_feed();
//! ```
//!
//! Requests go to the page's own origin. Loaders run on the browser event
//! loop and never block it.

mod dom;
mod http;

use std::rc::Rc;

use bnp_feeds::{
    ids, load_main_feed, load_own_profile, load_visited_profile, MarkupPolicy,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

pub use dom::DomPage;
pub use http::FetchHttp;

/// Text insertion policy for the `markup` argument of the entry points
fn markup_policy(markup: Option<String>) -> MarkupPolicy {
    match markup.as_deref().map(str::parse::<MarkupPolicy>) {
        Some(Ok(policy)) => policy,
        Some(Err(e)) => {
            web_sys::console::warn_1(&format!("{}, using raw", e).into());
            MarkupPolicy::Raw
        }
        None => MarkupPolicy::Raw,
    }
}

fn context() -> Option<(Rc<FetchHttp>, Rc<DomPage>)> {
    console_error_panic_hook::set_once();

    let page = match DomPage::from_window() {
        Some(page) => page,
        None => {
            web_sys::console::error_1(&"No document to render into".into());
            return None;
        }
    };
    Some((Rc::new(FetchHttp::same_origin()), Rc::new(page)))
}

/// Main feed: load the first page and load another on each click of the
/// append control.
#[wasm_bindgen]
pub fn start_main_feed(markup: Option<String>) {
    let Some((http, page)) = context() else {
        return;
    };
    let policy = markup_policy(markup);

    {
        let http = Rc::clone(&http);
        let page = Rc::clone(&page);
        spawn_local(async move {
            load_main_feed(&*http, &*page, policy).await;
        });
    }

    let Some(control) = page.element(ids::APPEND_DIARY) else {
        return;
    };
    let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let http = Rc::clone(&http);
        let page = Rc::clone(&page);
        spawn_local(async move {
            load_main_feed(&*http, &*page, policy).await;
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(e) =
        control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
    {
        web_sys::console::error_1(&format!("Cannot bind append control: {:?}", e).into());
    }
    on_click.forget();
}

/// Own profile page: public diaries and posts into `#entries`
#[wasm_bindgen]
pub fn start_own_profile(markup: Option<String>) {
    let Some((http, page)) = context() else {
        return;
    };
    let policy = markup_policy(markup);

    spawn_local(async move {
        load_own_profile(&*http, &*page, policy).await;
    });
}

/// Profile page: private diaries if it is the viewer's own, public diaries always
#[wasm_bindgen]
pub fn start_visited_profile(markup: Option<String>) {
    let Some((http, page)) = context() else {
        return;
    };
    let policy = markup_policy(markup);

    spawn_local(async move {
        load_visited_profile(&*http, &*page, policy).await;
    });
}
