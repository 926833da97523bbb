// Factory Method Pattern - creators decide which concrete product to build,
// callers only ever see the product trait.

use crate::console::Console;

pub trait Animal {
    fn speak(&self) -> &'static str;
}

pub struct Dog;
impl Animal for Dog {
    fn speak(&self) -> &'static str {
        "Woof!"
    }
}

pub struct Cat;
impl Animal for Cat {
    fn speak(&self) -> &'static str {
        "Meow!"
    }
}

pub trait AnimalFactory {
    fn create_animal(&self) -> Box<dyn Animal>;
}

pub struct DogFactory;
impl AnimalFactory for DogFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Dog)
    }
}

pub struct CatFactory;
impl AnimalFactory for CatFactory {
    fn create_animal(&self) -> Box<dyn Animal> {
        Box::new(Cat)
    }
}

pub fn get_animal(console: &Console, factory: &dyn AnimalFactory) {
    let animal = factory.create_animal();
    console.say(format!("The animal says: {}", animal.speak()));
}

pub fn factory_example(console: &Console) {
    get_animal(console, &DogFactory);
    get_animal(console, &CatFactory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_build_their_animal() {
        assert_eq!(DogFactory.create_animal().speak(), "Woof!");
        assert_eq!(CatFactory.create_animal().speak(), "Meow!");
    }

    #[test]
    fn test_get_animal_through_trait_object() {
        let console = Console::capture();
        let factories: Vec<Box<dyn AnimalFactory>> =
            vec![Box::new(CatFactory), Box::new(DogFactory)];
        for factory in &factories {
            get_animal(&console, factory.as_ref());
        }
        assert_eq!(
            console.lines(),
            vec!["The animal says: Meow!", "The animal says: Woof!"]
        );
    }
}
