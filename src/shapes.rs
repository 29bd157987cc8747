// 📐 Shapes - Area through a shared trait
// Rectangle, Circle, and Triangle only have `area` in common

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ============================================================================
// SHAPE TRAIT
// ============================================================================

/// Anything with a closed-form area
pub trait Shape {
    fn area(&self) -> f64;

    /// Human-readable label, used by the CLI
    fn name(&self) -> &'static str;
}

// ============================================================================
// SHAPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn name(&self) -> &'static str {
        "Rectangle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "Circle"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Triangle { base, height }
    }
}

impl Shape for Triangle {
    /// Half base times perpendicular height
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }
}

/// Perimeter of a rectangle: 2 * (width + height)
pub fn perimeter(rectangle: &Rectangle) -> f64 {
    2.0 * (rectangle.width + rectangle.height)
}

// ============================================================================
// TESTS
// ============================================================================
