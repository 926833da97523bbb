// Builder Pattern - a director drives a builder through a fixed sequence of
// steps to assemble different representations of the same product.

use crate::console::Console;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn add(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

// ============================================================================
// Builder interface
// ============================================================================

pub trait Builder {
    fn reset(&mut self);
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
    fn result(&self) -> &Product;
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Builder for ConcreteBuilder {
    fn reset(&mut self) {
        self.product = Product::default();
    }

    fn produce_part_a(&mut self) {
        self.product.add("PartA");
    }

    fn produce_part_b(&mut self) {
        self.product.add("PartB");
    }

    fn produce_part_c(&mut self) {
        self.product.add("PartC");
    }

    fn result(&self) -> &Product {
        &self.product
    }
}

// ============================================================================
// Director
// ============================================================================

/// Knows the build recipes, not the parts. Works with any [`Builder`].
pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}

pub fn builder_example(console: &Console) {
    let mut builder = ConcreteBuilder::new();

    console.say("Standard basic product:");
    Director::build_minimal_viable_product(&mut builder);
    console.say(builder.result().list_parts());

    console.say("Standard full featured product:");
    builder.reset();
    Director::build_full_featured_product(&mut builder);
    console.say(builder.result().list_parts());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_product() {
        let mut builder = ConcreteBuilder::new();
        Director::build_minimal_viable_product(&mut builder);
        assert_eq!(builder.result().list_parts(), "Product parts: PartA");
    }

    #[test]
    fn test_full_product_order() {
        let mut builder = ConcreteBuilder::new();
        Director::build_full_featured_product(&mut builder);
        assert_eq!(builder.result().parts(), ["PartA", "PartB", "PartC"]);
    }

    #[test]
    fn test_parts_accumulate_until_reset() {
        let mut builder = ConcreteBuilder::new();
        Director::build_minimal_viable_product(&mut builder);
        Director::build_minimal_viable_product(&mut builder);
        assert_eq!(builder.result().parts().len(), 2);

        builder.reset();
        assert!(builder.result().parts().is_empty());
        assert_eq!(builder.result().list_parts(), "Product parts: ");
    }

    #[test]
    fn test_builder_example_output() {
        let console = Console::capture();
        builder_example(&console);
        assert_eq!(
            console.lines(),
            vec![
                "Standard basic product:",
                "Product parts: PartA",
                "Standard full featured product:",
                "Product parts: PartA, PartB, PartC",
            ]
        );
    }
}
