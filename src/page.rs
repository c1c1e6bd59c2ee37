// Wires every page effect to the DOM.
// Each effect mounts on its own. A missing element disables that one effect
// and leaves a console warning, the rest of the page keeps working.

use crate::background;
use crate::error::FieldError;
use crate::pulse::{GlowPulse, SkillDial, SKILL_THRESHOLD};
use crate::scheduler;
use crate::typewriter::{
    MessageTyper, TitleTyper, CONFIRMATION, CONFIRMATION_HOLD_MS, REVEAL_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, Node, Window,
};

pub const PRELOADER_FADE: &str = "opacity 600ms ease, visibility 600ms";
pub const PRELOADER_REMOVE_MS: i32 = 700;

pub const PROJECTS: [&str; 3] = [
    "<h3>Responsive Web Portfolio</h3><p>This project: elegant cyber-modern portfolio built with animated backgrounds, neon-glow shadows, and fully responsive layouts.</p>",
    "<h3>Color Theme Experiments</h3><p>Websites switching between dark, blue, and RGB themes, showing how palette can affect digital moods.</p>",
    "<h3>Hackathon Group Apps</h3><p>Group project apps for student events; designed and coded in a fast-paced collaborative environment.</p>",
];

/// Summary for a card's 1-based `data-project` value.
pub fn project_summary(data_project: &str) -> Option<&'static str> {
    let n: usize = data_project.trim().parse().ok()?;
    PROJECTS.get(n.checked_sub(1)?).copied()
}

pub fn details_label(expanded: bool) -> &'static str {
    if expanded {
        "Show Less"
    } else {
        "View Details"
    }
}

pub fn mount_all() {
    let (window, document) = match host() {
        Ok(host) => host,
        Err(e) => {
            warn!("page effects disabled: {}", e);
            return;
        }
    };

    let mounts: Vec<(&str, Result<(), FieldError>)> = vec![
        ("background", background::mount(background::CANVAS_ID)),
        ("typewriter", mount_typewriter(&document)),
        ("preloader", mount_preloader(&window, &document)),
        ("hex glow", mount_hex_glow(&document)),
        ("skill dials", mount_skill_dials(&document)),
        ("skill bars", mount_skill_bars(&document)),
        ("fab", mount_fab(&document)),
        ("project details", mount_project_details(&document)),
        ("timeline", mount_timeline(&document)),
        ("project modal", mount_project_modal(&window, &document)),
        ("contact form", mount_contact_form(&document)),
    ];
    for (name, result) in mounts {
        if let Err(e) = result {
            warn!("{} not mounted: {}", name, e);
        }
    }
}

fn host() -> Result<(Window, Document), FieldError> {
    let window = scheduler::window()?;
    let document = window
        .document()
        .ok_or_else(|| FieldError::Unsupported(String::from("no document")))?;
    Ok((window, document))
}

fn by_id(document: &Document, id: &str) -> Result<Element, FieldError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FieldError::MissingElement(id.to_owned()))
}

fn html(element: Element) -> Result<HtmlElement, FieldError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| FieldError::Unsupported(String::from("non-html element")))
}

fn child(parent: &Element, selector: &str) -> Result<Element, FieldError> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| FieldError::MissingElement(selector.to_owned()))
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, FieldError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FieldError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

fn toggle(element: &Element, class: &str) {
    if let Err(e) = element.class_list().toggle(class) {
        warn!("could not toggle '{}': {:?}", class, e);
    }
}

// Headline

fn mount_typewriter(document: &Document) -> Result<(), FieldError> {
    let target = by_id(document, "typewriter")?;
    type_titles(target, TitleTyper::default());
    Ok(())
}

fn type_titles(target: Element, mut typer: TitleTyper) {
    let step = typer.tick();
    if let Some(text) = step.text {
        target.set_text_content(Some(&text));
    }
    if let Err(e) = scheduler::after(step.delay_ms, move || type_titles(target, typer)) {
        warn!("typewriter stopped: {}", e);
    }
}

// Preloader

pub fn mount_preloader(window: &Window, document: &Document) -> Result<(), FieldError> {
    let preloader = html(by_id(document, "preloader")?)?;
    if document.ready_state() == "complete" {
        return fade_preloader(preloader);
    }
    listen(window, "load", move |_| {
        if let Err(e) = fade_preloader(preloader.clone()) {
            warn!("preloader stuck: {}", e);
        }
    })
}

pub fn fade_preloader(preloader: HtmlElement) -> Result<(), FieldError> {
    let style = preloader.style();
    style.set_property("transition", PRELOADER_FADE)?;
    style.set_property("opacity", "0")?;
    scheduler::after(PRELOADER_REMOVE_MS, move || {
        let _ = preloader.style().set_property("visibility", "hidden");
        preloader.remove();
    })?;
    Ok(())
}

// Avatar glow and skills

fn mount_hex_glow(document: &Document) -> Result<(), FieldError> {
    let glow = match document.query_selector(".hex-glow")? {
        Some(glow) => html(glow)?,
        None => return Ok(()),
    };
    let mut pulse = GlowPulse::new();
    scheduler::each_frame(move || {
        let (scale, blur) = pulse.advance();
        let style = glow.style();
        style
            .set_property("transform", &GlowPulse::transform(scale))
            .and_then(|_| style.set_property("filter", &GlowPulse::filter(blur)))
            .is_ok()
    })
}

fn mount_skill_dials(document: &Document) -> Result<(), FieldError> {
    let items = elements(document, ".skill-item")?;
    if items.is_empty() {
        return Ok(());
    }

    let on_visible = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let item = entry.target();
                observer.unobserve(&item);
                if let Err(e) = animate_dial(item) {
                    warn!("skill dial skipped: {}", e);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SKILL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)?;
    on_visible.forget();

    for item in &items {
        observer.observe(item);
    }
    Ok(())
}

fn animate_dial(item: Element) -> Result<(), FieldError> {
    let mut dial = item
        .get_attribute("data-percent")
        .and_then(|percent| SkillDial::parse(&percent))
        .ok_or_else(|| FieldError::Unsupported(String::from("non-numeric data-percent")))?;
    let circle = html(child(&item, ".skill-dot-circle")?)?;
    let label = child(&item, ".skill-percent")?;

    scheduler::each_frame(move || {
        dial.advance();
        let _ = circle.style().set_property("background", &dial.background());
        label.set_text_content(Some(&dial.label()));
        if dial.is_done() {
            let _ = item.class_list().add_1("visible");
            false
        } else {
            true
        }
    })
}

fn mount_skill_bars(document: &Document) -> Result<(), FieldError> {
    for bar in elements(document, ".skill-bar")? {
        let percent = match bar.get_attribute("data-percent") {
            Some(percent) => percent,
            None => continue,
        };
        html(bar)?
            .style()
            .set_property("width", &format!("{}%", percent))?;
    }
    Ok(())
}

// Toggles

pub fn mount_fab(document: &Document) -> Result<(), FieldError> {
    let fab = by_id(document, "fab")?;
    let popup = by_id(document, "fab-popup")?;
    let body = document
        .body()
        .ok_or_else(|| FieldError::MissingElement(String::from("body")))?;

    {
        let popup = popup.clone();
        listen(&fab, "click", move |_| toggle(&popup, "show"))?;
    }
    let fab_button = fab.clone();
    listen(&body, "click", move |event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Node>().ok())
            .map_or(false, |node| {
                fab_button.contains(Some(&node)) || popup.contains(Some(&node))
            });
        if !inside {
            let _ = popup.class_list().remove_1("show");
        }
    })
}

pub fn mount_project_details(document: &Document) -> Result<(), FieldError> {
    for button in elements(document, ".project-btn")? {
        let target = button.clone();
        listen(&button, "click", move |_| {
            if let Err(e) = toggle_details(&target) {
                warn!("project details: {}", e);
            }
        })?;
    }
    Ok(())
}

fn toggle_details(button: &Element) -> Result<(), FieldError> {
    let card = button
        .closest(".project-card")?
        .ok_or_else(|| FieldError::MissingElement(String::from(".project-card")))?;
    let description = child(&card, ".project-desc")?;
    let expanded = description.class_list().toggle("expanded")?;
    button.set_text_content(Some(details_label(expanded)));
    Ok(())
}

pub fn mount_timeline(document: &Document) -> Result<(), FieldError> {
    for card in elements(document, ".timeline-card")? {
        let clicked = card.clone();
        listen(&card, "click", move |_| toggle(&clicked, "expanded"))?;
        let keyed = card.clone();
        listen(&card, "keydown", move |event| {
            if key_of(&event).as_deref() == Some("Enter") {
                toggle(&keyed, "expanded");
            }
        })?;
    }
    Ok(())
}

pub fn mount_project_modal(window: &Window, document: &Document) -> Result<(), FieldError> {
    let modal = by_id(document, "projectModal")?;
    let info = by_id(document, "modalProjectInfo")?;
    let close = by_id(document, "closeModal")?;

    for card in elements(document, ".project-card")? {
        let (modal, info, clicked) = (modal.clone(), info.clone(), card.clone());
        listen(&card, "click", move |_| {
            let summary = clicked
                .get_attribute("data-project")
                .as_deref()
                .and_then(project_summary);
            if let Some(summary) = summary {
                info.set_inner_html(summary);
                let _ = modal.class_list().add_1("show");
            }
        })?;
    }

    {
        let modal = modal.clone();
        listen(&close, "click", move |_| {
            let _ = modal.class_list().remove_1("show");
        })?;
    }
    {
        let modal = modal.clone();
        listen(window, "keydown", move |event| {
            if key_of(&event).as_deref() == Some("Escape") {
                let _ = modal.class_list().remove_1("show");
            }
        })?;
    }
    let backdrop = modal.clone();
    listen(&modal, "click", move |event| {
        let backdrop_value: &JsValue = backdrop.as_ref();
        let on_backdrop = event
            .target()
            .map_or(false, |target| JsValue::from(target) == *backdrop_value);
        if on_backdrop {
            let _ = backdrop.class_list().remove_1("show");
        }
    })
}

// Contact form

pub fn mount_contact_form(document: &Document) -> Result<(), FieldError> {
    let form = by_id(document, "contactForm")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| FieldError::Unsupported(String::from("'contactForm' is not a form")))?;
    let message = html(by_id(document, "formMsg")?)?;

    let submitted = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let _ = message.style().set_property("display", "block");
        message.set_text_content(Some(""));

        let (message, form) = (message.clone(), submitted.clone());
        let typer = MessageTyper::new(CONFIRMATION);
        if let Err(e) = scheduler::after(REVEAL_MS, move || reveal(message, form, typer)) {
            warn!("confirmation not shown: {}", e);
        }
    })
}

fn reveal(message: HtmlElement, form: HtmlFormElement, mut typer: MessageTyper) {
    if let Some(text) = typer.next() {
        message.set_text_content(Some(&text));
    }
    let scheduled = if typer.is_done() {
        scheduler::after(CONFIRMATION_HOLD_MS, move || {
            let _ = message.style().set_property("display", "none");
            form.reset();
        })
    } else {
        scheduler::after(REVEAL_MS, move || reveal(message, form, typer))
    };
    if let Err(e) = scheduled {
        warn!("confirmation stopped: {}", e);
    }
}
