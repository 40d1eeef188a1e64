//! Prompt Graph Module
//!
//! The navigable menu hierarchy: an arena of prompts, each owning an
//! ordered, paginated list of options. Prompts and options are referred to
//! by plain integer handles and the graph is append-only for the lifetime
//! of a session.

/// Fixed capacity of a single page in a paginated prompt.
pub const PAGE_SIZE: usize = 10;

/// Handle to a [`Prompt`] in the interaction arena.
pub type PromptId = usize;

/// Handle to an [`OptionEntry`] in the interaction arena.
pub type OptionId = usize;

/// Result of invoking an option's action.
///
/// Both fields are surfaced to the user verbatim; `error` being `Some` does
/// not terminate the session.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub message: String,
    pub error: Option<String>,
}

impl ActionOutcome {
    /// Create a successful outcome with the given message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Create a failed outcome carrying both a message and the error text.
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Deferred operation attached to a terminal option.
///
/// Implementations are small capability structs holding exactly the data
/// they need, captured at graph-build time. Invoked synchronously, at most
/// once per Enter press on the owning option.
pub trait Action {
    fn invoke(&self) -> ActionOutcome;
}

/// One navigable screen: a title, a description/help line and a paginated
/// set of options.
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub description: String,
    pub parent: Option<PromptId>,
    pub paginated: bool,
    pages: Vec<Vec<OptionId>>,
    page_idx: usize,
}

impl Prompt {
    fn new(id: PromptId, title: &str, description: &str, paginated: bool) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            parent: None,
            paginated,
            // Every prompt owns at least one (possibly empty) page.
            pages: vec![Vec::new()],
            page_idx: 0,
        }
    }

    /// Number of pages, always at least 1.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Index of the page currently shown.
    pub fn page_idx(&self) -> usize {
        self.page_idx
    }

    /// Options on the page currently shown.
    pub fn current_page(&self) -> &[OptionId] {
        &self.pages[self.page_idx]
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Vec<OptionId>] {
        &self.pages
    }

    fn push_option(&mut self, option: OptionId) {
        if !self.paginated {
            self.pages[0].push(option);
            return;
        }

        let last = self.pages.len() - 1;
        if self.pages[last].len() < PAGE_SIZE {
            self.pages[last].push(option);
        } else {
            self.pages.push(vec![option]);
        }
    }

    /// Advance to the next page, resetting nothing else. Returns whether a
    /// page turn happened.
    pub(crate) fn next_page(&mut self) -> bool {
        if self.page_idx + 1 < self.pages.len() {
            self.page_idx += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns whether a page turn happened.
    pub(crate) fn prev_page(&mut self) -> bool {
        if self.page_idx > 0 {
            self.page_idx -= 1;
            true
        } else {
            false
        }
    }

    /// Jump back to the first page.
    pub(crate) fn reset_page(&mut self) {
        self.page_idx = 0;
    }

    /// Swap in a different page list (used by the search controller when
    /// filtering) and jump back to the first page.
    pub(crate) fn replace_pages(&mut self, pages: Vec<Vec<OptionId>>) {
        debug_assert!(!pages.is_empty());
        self.pages = pages;
        self.page_idx = 0;
    }
}

/// One selectable entry on a prompt.
///
/// May link to a child prompt, carry a deferred action, or both; when both
/// are present, selecting it navigates first and then invokes the action.
pub struct OptionEntry<P> {
    pub id: OptionId,
    pub title: String,
    pub description: String,
    pub payload: Option<P>,
    pub child_prompt: Option<PromptId>,
    action: Option<Box<dyn Action>>,
}

impl<P> OptionEntry<P> {
    /// The option's action, if one has been attached.
    pub fn action(&self) -> Option<&dyn Action> {
        self.action.as_deref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}

/// Arena owning every prompt and option of one session.
///
/// Handles returned by the `create_*`/`add_*` calls index into this arena;
/// nothing is ever removed, so handles stay valid for the session lifetime.
pub struct Interaction<P> {
    prompts: Vec<Prompt>,
    options: Vec<OptionEntry<P>>,
}

impl<P> Interaction<P> {
    pub fn new() -> Self {
        Self {
            prompts: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Allocate a new prompt and return its handle. The first prompt
    /// created is the root of the session.
    pub fn create_prompt(&mut self, title: &str, description: &str, paginated: bool) -> PromptId {
        let id = self.prompts.len();
        self.prompts.push(Prompt::new(id, title, description, paginated));
        id
    }

    /// Record a back-link used only for "navigate up", never for ownership.
    pub fn attach_parent(&mut self, prompt: PromptId, parent: PromptId) {
        self.prompts[prompt].parent = Some(parent);
    }

    /// Append an option to a prompt's pages. Non-paginated prompts keep all
    /// options on a single unbounded page; paginated prompts fill the last
    /// page to capacity before opening a new one.
    pub fn add_option(
        &mut self,
        prompt: PromptId,
        title: &str,
        description: &str,
        payload: P,
    ) -> OptionId {
        let id = self.push_entry(title, description, Some(payload));
        self.prompts[prompt].push_option(id);
        id
    }

    /// Allocate an option that is not attached to any prompt page (the
    /// search controller's synthetic "no results" placeholder).
    pub(crate) fn add_detached_option(&mut self, title: &str, description: &str) -> OptionId {
        self.push_entry(title, description, None)
    }

    fn push_entry(&mut self, title: &str, description: &str, payload: Option<P>) -> OptionId {
        let id = self.options.len();
        self.options.push(OptionEntry {
            id,
            title: title.to_string(),
            description: description.to_string(),
            payload,
            child_prompt: None,
            action: None,
        });
        id
    }

    /// Link an option to a child prompt. Idempotent; a later call replaces
    /// the earlier link.
    pub fn attach_child_prompt(&mut self, option: OptionId, child: PromptId) {
        self.options[option].child_prompt = Some(child);
    }

    /// Attach a deferred action to an option. Idempotent; a later call
    /// replaces the earlier action.
    pub fn attach_action(&mut self, option: OptionId, action: Box<dyn Action>) {
        self.options[option].action = Some(action);
    }

    pub fn prompt(&self, id: PromptId) -> &Prompt {
        &self.prompts[id]
    }

    pub(crate) fn prompt_mut(&mut self, id: PromptId) -> &mut Prompt {
        &mut self.prompts[id]
    }

    pub fn option(&self, id: OptionId) -> &OptionEntry<P> {
        &self.options[id]
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }
}

impl<P> Default for Interaction<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_invariant() {
        let mut graph: Interaction<u32> = Interaction::new();
        let root = graph.create_prompt("Root", "help", true);

        for n in 0..25 {
            graph.add_option(root, &format!("opt{}", n), "", n);
        }

        let prompt = graph.prompt(root);
        assert_eq!(prompt.page_count(), 3);
        assert_eq!(prompt.pages()[0].len(), 10);
        assert_eq!(prompt.pages()[1].len(), 10);
        assert_eq!(prompt.pages()[2].len(), 5);
    }

    #[test]
    fn test_unpaginated_prompt_single_page() {
        let mut graph: Interaction<u32> = Interaction::new();
        let root = graph.create_prompt("Root", "help", false);

        for n in 0..25 {
            graph.add_option(root, &format!("opt{}", n), "", n);
        }

        let prompt = graph.prompt(root);
        assert_eq!(prompt.page_count(), 1);
        assert_eq!(prompt.pages()[0].len(), 25);
    }

    #[test]
    fn test_empty_prompt_has_one_page() {
        let mut graph: Interaction<u32> = Interaction::new();
        let root = graph.create_prompt("Root", "help", true);
        assert_eq!(graph.prompt(root).page_count(), 1);
        assert!(graph.prompt(root).current_page().is_empty());
    }

    #[test]
    fn test_page_turns_respect_bounds() {
        let mut graph: Interaction<u32> = Interaction::new();
        let root = graph.create_prompt("Root", "help", true);
        for n in 0..25 {
            graph.add_option(root, &format!("opt{}", n), "", n);
        }

        let prompt = graph.prompt_mut(root);
        assert!(!prompt.prev_page());
        assert!(prompt.next_page());
        assert!(prompt.next_page());
        assert!(!prompt.next_page());
        assert_eq!(prompt.page_idx(), 2);
        assert!(prompt.prev_page());
        assert_eq!(prompt.page_idx(), 1);
    }

    #[test]
    fn test_attach_setters_are_idempotent() {
        struct Noop;
        impl Action for Noop {
            fn invoke(&self) -> ActionOutcome {
                ActionOutcome::success("ok")
            }
        }

        let mut graph: Interaction<u32> = Interaction::new();
        let root = graph.create_prompt("Root", "help", false);
        let child_a = graph.create_prompt("A", "", false);
        let child_b = graph.create_prompt("B", "", false);
        let option = graph.add_option(root, "opt", "", 7);

        graph.attach_child_prompt(option, child_a);
        graph.attach_child_prompt(option, child_b);
        assert_eq!(graph.option(option).child_prompt, Some(child_b));

        graph.attach_action(option, Box::new(Noop));
        graph.attach_action(option, Box::new(Noop));
        assert!(graph.option(option).has_action());
    }

    #[test]
    fn test_parent_back_link() {
        let mut graph: Interaction<u32> = Interaction::new();
        let root = graph.create_prompt("Root", "help", true);
        let child = graph.create_prompt("Child", "help", true);
        graph.attach_parent(child, root);

        assert_eq!(graph.prompt(child).parent, Some(root));
        assert_eq!(graph.prompt(root).parent, None);
    }
}
