//! Simple Todo entry point
//!
//! Handles platform-specific initialization and binds the page controls.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent, MouseEvent};

    use simple_todo::platform::{DomSurface, LocalStorage};
    use simple_todo::view::{Command, DATA_ACTION, DATA_ID};
    use simple_todo::{App, Config, Store};

    type WebApp = App<LocalStorage, DomSurface>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = Config::default();
        if console_log::init_with_level(config.log_level).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Simple Todo starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let store = Store::new(LocalStorage::open(), config.storage_key.clone());
        let surface = DomSurface::new(document.clone(), &config.list_id);
        let list = surface.container().cloned();

        let app = Rc::new(RefCell::new(App::new(store, surface)));
        app.borrow_mut().start();

        if let Some(list) = list {
            setup_row_actions(&list, app.clone());
        }
        setup_add_control(&document, &config, app);

        Ok(())
    }

    /// One delegated listener on the list; rows are rebuilt on every render
    fn setup_row_actions(list: &Element, app: Rc<RefCell<WebApp>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            if let Some(command) = row_command(&event) {
                app.borrow_mut().dispatch(command);
            }
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Read the command off the clicked row control
    fn row_command(event: &MouseEvent) -> Option<Command> {
        let target: Element = event.target()?.dyn_into().ok()?;
        let control = target.closest(&format!("[{}]", DATA_ACTION)).ok()??;
        let action = control.get_attribute(DATA_ACTION)?;
        let id = control.get_attribute(DATA_ID)?;
        Command::from_row(&action, &id)
    }

    fn setup_add_control(document: &Document, config: &Config, app: Rc<RefCell<WebApp>>) {
        let input = document
            .get_element_by_id(&config.input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        let button = document.get_element_by_id(&config.add_button_id);

        let (Some(input), Some(button)) = (input, button) else {
            log::warn!("Add controls not found, new todos cannot be entered");
            return;
        };

        // Add button
        {
            let app = app.clone();
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                submit(&app, &input);
            });
            let _ =
                button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in the input
        {
            let input_clone = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    submit(&app, &input_clone);
                }
            });
            let _ = input
                .add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn submit(app: &Rc<RefCell<WebApp>>, input: &HtmlInputElement) {
        app.borrow_mut().submit(&input.value());
        input.set_value("");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Simple Todo (native) starting...");
    log::info!("The list UI needs a browser - run with `trunk serve` for the web version");

    println!("\nRunning scripted session...");
    demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the app against in-memory storage and print each render
#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use simple_todo::{App, Command, Config, MemoryStorage, MemorySurface, Store};

    let config = Config::default().with_storage_key("simple_todo_demo");
    let store = Store::new(MemoryStorage::new(), config.storage_key.clone());
    let mut app = App::new(store, MemorySurface::new());
    app.start();

    app.submit("buy milk");
    app.submit("   ");
    app.submit("walk the dog");
    print_list(&app.surface().lines());

    if let Some(first) = app.store().todos().first().map(|t| t.id.clone()) {
        app.dispatch(Command::Toggle(first.clone()));
        print_list(&app.surface().lines());
        app.dispatch(Command::Remove(first));
        print_list(&app.surface().lines());
    }

    println!("{} remaining", app.store().remaining());
}

#[cfg(not(target_arch = "wasm32"))]
fn print_list(lines: &[String]) {
    println!("---");
    for line in lines {
        println!("{}", line);
    }
}
