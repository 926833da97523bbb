// Proxy Pattern - same interface as the real subject, with an access check
// before the call and an access log after it.

use crate::console::Console;
use crate::error::{PatternError, Result};
use tracing::info;

pub trait Subject {
    fn request(&self) -> Result<String>;
}

pub struct RealSubject;

impl Subject for RealSubject {
    fn request(&self) -> Result<String> {
        Ok("RealSubject: Handling request.".to_string())
    }
}

pub struct Proxy<S> {
    real_subject: S,
    console: Console,
    allow: bool,
}

impl<S: Subject> Proxy<S> {
    pub fn new(real_subject: S, console: Console) -> Self {
        Self::with_access(real_subject, console, true)
    }

    pub fn with_access(real_subject: S, console: Console, allow: bool) -> Self {
        Self {
            real_subject,
            console,
            allow,
        }
    }

    fn check_access(&self) -> bool {
        self.console
            .say("Proxy: Checking access prior to firing a real request.");
        self.allow
    }

    fn log_access(&self) {
        info!("request forwarded to real subject");
        self.console.say("Proxy: Logging the time of request.");
    }
}

impl<S: Subject> Subject for Proxy<S> {
    fn request(&self) -> Result<String> {
        if !self.check_access() {
            return Err(PatternError::access_denied("RealSubject"));
        }
        let result = self.real_subject.request()?;
        self.log_access();
        Ok(result)
    }
}

pub fn client_code(console: &Console, subject: &dyn Subject) {
    match subject.request() {
        Ok(response) => console.say(response),
        Err(PatternError::AccessDenied { .. }) => console.say("Proxy: Access denied."),
        Err(err) => console.say(err.to_string()),
    }
}

pub fn proxy_example(console: &Console) {
    console.say("Client: Executing the client code with a real subject:");
    client_code(console, &RealSubject);

    console.say("");
    console.say("Client: Executing the same client code with a proxy:");
    let proxy = Proxy::new(RealSubject, console.clone());
    client_code(console, &proxy);
}
