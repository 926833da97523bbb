// Strategy Pattern with Trait Objects
// The context owns one strategy at a time and can swap it at runtime.

use crate::console::Console;

pub trait Strategy {
    fn execute(&self, console: &Console);
    fn name(&self) -> &str;
}

pub struct ConcreteStrategyA;
impl Strategy for ConcreteStrategyA {
    fn execute(&self, console: &Console) {
        console.say("Executing strategy A");
    }

    fn name(&self) -> &str {
        "A"
    }
}

pub struct ConcreteStrategyB;
impl Strategy for ConcreteStrategyB {
    fn execute(&self, console: &Console) {
        console.say("Executing strategy B");
    }

    fn name(&self) -> &str {
        "B"
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
    console: Console,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>, console: Console) -> Self {
        Self { strategy, console }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    pub fn execute_strategy(&self) {
        self.strategy.execute(&self.console);
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}

pub fn strategy_example(console: &Console) {
    let mut context = Context::new(Box::new(ConcreteStrategyA), console.clone());
    context.execute_strategy();

    context.set_strategy(Box::new(ConcreteStrategyB));
    context.execute_strategy();
}
