//! Application state for the terminal front end.

use crate::{Pixelate, Teletype};
use phosphor_core::{ElementId, ElementKind};
use phosphor_narrative::{
    CompletionToken, Gesture, Narrative, PromptInput, RenderConfig, RenderInstruction, RenderMode,
    RevealEffect,
};
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Reveal effect mounted for the active element.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Text, link, prompt and toggle elements
    Teletype(Teletype),
    /// Bitmaps
    Pixelate(Pixelate),
}

impl Effect {
    fn tick(&mut self, dt: Duration) -> bool {
        match self {
            Effect::Teletype(effect) => effect.tick(dt),
            Effect::Pixelate(effect) => effect.tick(dt),
        }
    }

    /// Current frame of the effect.
    pub fn frame(&self) -> String {
        match self {
            Effect::Teletype(effect) => effect.frame(),
            Effect::Pixelate(effect) => effect.frame(),
        }
    }
}

/// A reveal renderer bound to one element.
#[derive(Debug, Clone)]
struct Mount {
    element: ElementId,
    effect: Effect,
    token: CompletionToken,
}

impl Mount {
    fn new(screen: &str, instruction: &RenderInstruction, render: &RenderConfig) -> Option<Self> {
        let RenderMode::Reveal {
            effect,
            autocomplete,
        } = instruction.mode()
        else {
            return None;
        };
        let text = instruction.payload().display_text();
        let effect = match effect {
            RevealEffect::Teletype => {
                Effect::Teletype(Teletype::new(text, render.teletype_speed(), autocomplete))
            }
            RevealEffect::Pixelate => {
                Effect::Pixelate(Pixelate::new(text, render.bitmap_tick(), autocomplete))
            }
        };
        tracing::debug!(screen, element = %instruction.element(), "Mounted reveal renderer");
        Some(Self {
            element: instruction.element(),
            effect,
            token: CompletionToken::reveal(screen, instruction.element()),
        })
    }
}

/// Mouse button held down on an element.
#[derive(Debug, Clone, Copy)]
struct Press {
    element: ElementId,
    shift: bool,
    at: Instant,
}

/// Terminal application state.
pub struct App {
    narrative: Narrative,
    render: RenderConfig,
    screen: Option<String>,
    mount: Option<Mount>,
    rendered: HashSet<ElementId>,
    focus: Option<ElementId>,
    input: PromptInput,
    press: Option<Press>,
    hit_rows: Vec<(u16, ElementId)>,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl App {
    /// Wraps a started narrative.
    pub fn new(narrative: Narrative, render: RenderConfig) -> Self {
        let mut app = Self {
            narrative,
            render,
            screen: None,
            mount: None,
            rendered: HashSet::new(),
            focus: None,
            input: PromptInput::new(),
            press: None,
            hit_rows: Vec::new(),
            should_quit: false,
        };
        app.sync();
        app
    }

    /// The running narrative.
    pub fn narrative(&self) -> &Narrative {
        &self.narrative
    }

    /// Render configuration.
    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Text typed into the prompt.
    pub fn input(&self) -> &str {
        self.input.buffer()
    }

    /// Focused element.
    pub fn focus(&self) -> Option<ElementId> {
        self.focus
    }

    /// Current render plan.
    pub fn plan(&self) -> Vec<RenderInstruction> {
        self.narrative.render_plan(self.render.prompt())
    }

    /// Frame of the reveal renderer mounted for `element`, if any.
    pub fn reveal_frame(&self, element: ElementId) -> Option<String> {
        self.mount
            .as_ref()
            .filter(|m| m.element == element)
            .map(|m| m.effect.frame())
    }

    /// Records which terminal row shows which element, for mouse hits.
    pub fn set_hit_rows(&mut self, rows: Vec<(u16, ElementId)>) {
        self.hit_rows = rows;
    }

    /// Advances the mounted reveal renderer by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.sync();
        let finished = self.mount.as_mut().is_some_and(|m| m.effect.tick(dt));
        if finished {
            if let Some(event) = self.mount.as_mut().and_then(|m| m.token.fire()) {
                self.narrative.dispatch(event);
            }
            self.sync();
        }
    }

    /// Handles a key press.
    #[tracing::instrument(skip_all, fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.narrative.state().dialog_open() && matches!(key.code, KeyCode::Enter | KeyCode::Esc)
        {
            self.dismiss_dialog();
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.move_focus(true),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Enter => {
                let shift = key.modifiers.contains(KeyModifiers::SHIFT);
                self.activate_focused(shift);
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt_target() {
                    self.focus = Some(prompt);
                    self.input.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.prompt_target() {
                    self.focus = Some(prompt);
                    self.input.push(c);
                }
            }
            _ => {}
        }
        self.sync();
    }

    /// Handles a mouse event using the rows recorded by the last draw.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let now = Instant::now();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.narrative.state().dialog_open() => {
                self.dismiss_dialog();
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let hit = self
                    .hit_rows
                    .iter()
                    .find(|(row, _)| *row == mouse.row)
                    .map(|(_, element)| *element);
                if let Some(element) = hit {
                    let shift = mouse.modifiers.contains(KeyModifiers::SHIFT);
                    self.press(element, shift, now);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.release(now),
            _ => {}
        }
    }

    /// Starts a press on a revealed link or toggle. A press while a dialog
    /// is open only dismisses the dialog.
    pub fn press(&mut self, element: ElementId, shift: bool, at: Instant) {
        if self.narrative.state().dialog_open() {
            self.dismiss_dialog();
            return;
        }
        if let Some(kind) = self.clickable(element) {
            tracing::trace!(element = %element, %kind, shift, "Press started");
            self.focus = Some(element);
            self.press = Some(Press { element, shift, at });
        }
    }

    /// Ends the current press, activating its element.
    pub fn release(&mut self, at: Instant) {
        let Some(press) = self.press.take() else {
            return;
        };
        let gesture = Gesture {
            shift: press.shift,
            touches: 1,
            press: at.saturating_duration_since(press.at),
        };
        match self.clickable(press.element) {
            Some(ElementKind::Link) => {
                self.narrative.activate_link(press.element, &gesture);
            }
            Some(ElementKind::Toggle) => self.narrative.click_toggle(press.element),
            _ => {}
        }
        self.sync();
    }

    fn dismiss_dialog(&mut self) {
        self.narrative.close_dialog();
        self.press = None;
        self.sync();
    }

    /// Brings the mounted renderer and static render reports in line with the
    /// narrative state.
    fn sync(&mut self) {
        let active_screen = self.narrative.state().active_screen().clone();
        if active_screen != self.screen {
            tracing::debug!(screen = ?active_screen, "Screen changed, resetting renderers");
            self.screen = active_screen;
            self.mount = None;
            self.rendered.clear();
            self.focus = None;
            self.press = None;
            self.input.clear();
        }
        let Some(screen) = self.screen.clone() else {
            return;
        };
        self.load_pending();

        let plan = self.plan();
        match plan
            .iter()
            .find(|i| matches!(i.mode(), RenderMode::Reveal { .. }))
        {
            Some(active) => {
                if self.mount.as_ref().map(|m| m.element) != Some(active.element()) {
                    self.mount = Mount::new(&screen, active, &self.render);
                }
            }
            None => self.mount = None,
        }

        let first_renders: Vec<ElementId> = plan
            .iter()
            .filter(|i| matches!(i.mode(), RenderMode::Static { .. }))
            .map(RenderInstruction::element)
            .filter(|id| self.rendered.insert(*id))
            .collect();
        for element in first_renders {
            let mut token = CompletionToken::rendered(screen.as_str(), element);
            if let Some(event) = token.fire() {
                self.narrative.dispatch(event);
            }
        }
    }

    /// Acts as the loader for queued elements of the active screen.
    ///
    /// Bitmaps are shown through their alt text, so there is nothing to
    /// decode and every queued element is ready at once.
    fn load_pending(&mut self) {
        let state = self.narrative.state();
        let Some(screen) = state.current_screen() else {
            return;
        };
        let pending: Vec<ElementId> = state
            .loading()
            .iter()
            .filter(|id| screen.element(*id).is_some())
            .collect();

        for element in pending {
            tracing::debug!(element = %element, "Element loaded");
            self.narrative.mark_ready(element);
        }
    }

    /// Revealed elements that take focus, in screen order.
    fn focusables(&self) -> Vec<ElementId> {
        self.plan()
            .iter()
            .filter(|i| matches!(i.mode(), RenderMode::Static { .. }))
            .filter(|i| {
                matches!(
                    i.kind(),
                    ElementKind::Link | ElementKind::Toggle | ElementKind::Prompt
                )
            })
            .map(RenderInstruction::element)
            .collect()
    }

    fn move_focus(&mut self, forward: bool) {
        let focusables = self.focusables();
        if focusables.is_empty() {
            self.focus = None;
            return;
        }
        let len = focusables.len();
        let current = self
            .focus
            .and_then(|f| focusables.iter().position(|e| *e == f));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.focus = Some(focusables[next]);
    }

    fn activate_focused(&mut self, shift: bool) {
        let Some(element) = self.focus.or_else(|| self.prompt_target()) else {
            return;
        };
        let kind = self
            .plan()
            .iter()
            .find(|i| i.element() == element)
            .map(RenderInstruction::kind);
        match kind {
            Some(ElementKind::Link) => {
                let gesture = if shift {
                    Gesture::shift_click()
                } else {
                    Gesture::click()
                };
                self.narrative.activate_link(element, &gesture);
            }
            Some(ElementKind::Toggle) => self.narrative.click_toggle(element),
            Some(ElementKind::Prompt) => {
                self.narrative.submit_prompt(element, &mut self.input);
            }
            _ => {}
        }
    }

    /// Focused prompt, or the first revealed prompt on screen.
    fn prompt_target(&self) -> Option<ElementId> {
        let prompts: Vec<ElementId> = self
            .plan()
            .iter()
            .filter(|i| i.kind() == ElementKind::Prompt)
            .filter(|i| matches!(i.mode(), RenderMode::Static { .. }))
            .map(RenderInstruction::element)
            .collect();
        self.focus
            .filter(|f| prompts.contains(f))
            .or_else(|| prompts.first().copied())
    }

    /// Kind of a revealed link or toggle.
    fn clickable(&self, element: ElementId) -> Option<ElementKind> {
        self.plan()
            .iter()
            .find(|i| i.element() == element)
            .filter(|i| matches!(i.mode(), RenderMode::Static { .. }))
            .map(RenderInstruction::kind)
            .filter(|kind| matches!(kind, ElementKind::Link | ElementKind::Toggle))
    }
}
