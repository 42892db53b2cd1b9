use std::sync::Arc;

use academy::Site;
use maud::html;
use maudit::route::prelude::*;

#[route("/chat")]
pub struct ChatRedirect {
    pub site: Arc<Site>,
}

impl Route for ChatRedirect {
    fn render(&self, _: &mut PageContext) -> impl Into<RenderResult> {
        redirect(&self.site.theme.chat.link)
    }
}

pub fn redirect(target: &str) -> maud::Markup {
    html! {
        head {
            meta http-equiv="refresh" content=(format!("0;url={}", target));
            link rel="canonical" href=(target);
        }
    }
}
