pub mod modifiers;
