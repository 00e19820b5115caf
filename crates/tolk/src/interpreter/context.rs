//! Render context for tracking state during recursive translation.

use crate::interpreter::{RenderError, TranslationService};
use crate::types::MessageRequest;

/// State carried through one top-level `translate` call.
///
/// The context tracks:
/// - The owning service, so formatters can translate nested messages
/// - The stack of messages being rendered, for cycle detection
/// - The nesting depth, limited by the service's `max_depth`
pub struct RenderContext<'a> {
    service: &'a TranslationService,
    call_stack: Vec<Frame>,
    max_depth: usize,
}

struct Frame {
    request: MessageRequest,
    locale: String,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(service: &'a TranslationService, max_depth: usize) -> Self {
        Self {
            service,
            call_stack: Vec::new(),
            max_depth,
        }
    }

    /// The service performing this translation.
    pub fn service(&self) -> &'a TranslationService {
        self.service
    }

    /// Translate `request` as part of the current rendering.
    ///
    /// The nested request's own preferred locale wins over `locale`.
    pub fn translate(&mut self, request: &MessageRequest, locale: &str) -> Result<String, RenderError> {
        let locale = request.preferred_locale().unwrap_or(locale);
        let service = self.service;
        service
            .translate_within(self, request, locale)
            .map_err(RenderError::from)
    }

    /// Push a message onto the stack.
    ///
    /// Returns error if:
    /// - Maximum depth exceeded
    /// - The same request is already being rendered in the same locale
    pub(crate) fn push(&mut self, request: &MessageRequest, locale: &str) -> Result<(), RenderError> {
        if self.call_stack.len() >= self.max_depth {
            return Err(RenderError::MaxDepthExceeded {
                max_depth: self.max_depth,
            });
        }
        if self
            .call_stack
            .iter()
            .any(|frame| frame.locale == locale && frame.request == *request)
        {
            let mut chain: Vec<String> = self
                .call_stack
                .iter()
                .map(|frame| frame.request.key().to_string())
                .collect();
            chain.push(request.key().to_string());
            return Err(RenderError::CyclicReference { chain });
        }
        self.call_stack.push(Frame {
            request: request.clone(),
            locale: locale.to_string(),
        });
        Ok(())
    }

    pub(crate) fn pop(&mut self) {
        self.call_stack.pop();
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.call_stack.len()
    }

    /// Keys of the messages currently being rendered, outermost first.
    pub fn call_stack(&self) -> Vec<&str> {
        self.call_stack.iter().map(|frame| frame.request.key()).collect()
    }
}
