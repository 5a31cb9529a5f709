//! Browser demo: a sign-in mutation that loads on mount and a ping query fired on click.
//!
//! Build for the browser with `trunk serve --example demo`; native builds do nothing.

#[cfg(target_arch = "wasm32")]
mod app {
    use std::collections::BTreeMap;

    use gloo::utils::window;
    use gqlhook_core::{Operation, SubmitOutcome, Variables};
    use serde_json::{Value, json};
    use yew::prelude::*;

    use gqlhook_ui::{GraphqlProvider, use_graphql};

    const SIGNIN: &str = "mutation($login: String!, $password: String!) {
      login(login: $login, password: $password) {
        success
        error
      }
    }";

    const PING: &str = "{ ping }";

    fn endpoint() -> String {
        let origin = window()
            .location()
            .origin()
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        format!("{origin}/graphql")
    }

    fn object(value: Value) -> Variables {
        match value {
            Value::Object(map) => map,
            _ => Variables::new(),
        }
    }

    #[function_component(SignIn)]
    fn sign_in() -> Html {
        let login = use_graphql(Operation::new(SIGNIN).with_variables(object(json!({
            "login": "myusername",
            "password": "awesomeP@ssword!",
        }))));

        if let Some(error) = login.error() {
            return html! { <p>{ error.to_string() }</p> };
        }
        if login.loading() {
            return html! { <p>{ "Loading ..." }</p> };
        }
        match login.data() {
            Some(data) => html! { <p>{ data["login"]["success"].to_string() }</p> },
            None => html! { <p>{ "Nothing" }</p> },
        }
    }

    #[function_component(Ping)]
    fn ping() -> Html {
        let ping = use_graphql(Operation::new(PING));
        let reply = use_state(|| None as Option<String>);

        let onclick = {
            let ping = ping.clone();
            let reply = reply.clone();
            Callback::from(move |_| {
                let reply = reply.clone();
                ping.run_submit(
                    Variables::new(),
                    Callback::from(move |outcome: SubmitOutcome| {
                        reply.set(serde_json::to_string(&outcome).ok());
                    }),
                );
            })
        };

        html! {
            <div>
                <button {onclick} disabled={ping.loading()}>{ "Ping" }</button>
                if let Some(text) = (*reply).clone() {
                    <pre>{ text }</pre>
                }
            </div>
        }
    }

    #[function_component(DemoApp)]
    fn demo_app() -> Html {
        let headers = BTreeMap::from([("Authorization".to_string(), "yourBearerToken".to_string())]);

        html! {
            <GraphqlProvider endpoint={endpoint()} {headers}>
                <SignIn />
                <Ping />
            </GraphqlProvider>
        }
    }

    /// Mount into `#root`, or the document body when it is missing.
    pub fn run() {
        console_error_panic_hook::set_once();
        if let Some(root) = gloo::utils::document().get_element_by_id("root") {
            yew::Renderer::<DemoApp>::with_root(root).render();
        } else {
            yew::Renderer::<DemoApp>::new().render();
        }
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    app::run();
}
