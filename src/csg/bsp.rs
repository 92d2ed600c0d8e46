use super::{Plane, Polygon, SplitPolygons};

/// A BSP tree node over CSG polygons.
///
/// `plane` is `None` only for an empty tree. Polygons coplanar with the
/// node's plane are stored on the node itself.
#[derive(Debug, Clone)]
pub struct Node<S: Clone = ()> {
    pub plane: Option<Plane>,
    pub front: Option<Box<Node<S>>>,
    pub back: Option<Box<Node<S>>>,
    pub polygons: Vec<Polygon<S>>,
}

impl<S: Clone> Default for Node<S> {
    fn default() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }
}

impl<S: Clone> Node<S> {
    /// Builds a tree from `polygons`.
    #[must_use]
    pub fn new(polygons: Vec<Polygon<S>>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons, splitting them by the planes already in the tree.
    ///
    /// The first polygon's plane becomes the splitting plane of an empty node.
    pub fn build(&mut self, polygons: Vec<Polygon<S>>) {
        let Some(first) = polygons.first() else {
            return;
        };
        let plane = *self.plane.get_or_insert(*first.plane());

        let mut split = SplitPolygons::new();
        for polygon in polygons {
            plane.split_polygon(polygon, &mut split);
        }
        self.polygons.append(&mut split.coplanar_front);
        self.polygons.append(&mut split.coplanar_back);

        if !split.front.is_empty() {
            self.front.get_or_insert_with(Box::default).build(split.front);
        }
        if !split.back.is_empty() {
            self.back.get_or_insert_with(Box::default).build(split.back);
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(plane) = self.plane.as_mut() {
            plane.flip();
        }
        if let Some(front) = self.front.as_mut() {
            front.invert();
        }
        if let Some(back) = self.back.as_mut() {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Removes the parts of `polygons` that are inside this tree's solid.
    #[must_use]
    pub fn clip_polygons(&self, polygons: Vec<Polygon<S>>) -> Vec<Polygon<S>> {
        let Some(plane) = self.plane else {
            return polygons;
        };

        let mut split = SplitPolygons::new();
        for polygon in polygons {
            plane.split_polygon(polygon, &mut split);
        }
        let mut front = split.front;
        front.append(&mut split.coplanar_front);
        let mut back = split.back;
        back.append(&mut split.coplanar_back);

        let mut result = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };
        if let Some(node) = &self.back {
            result.extend(node.clip_polygons(back));
        }
        result
    }

    /// Removes every polygon of this tree that is inside `other`.
    pub fn clip_to(&mut self, other: &Node<S>) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = self.front.as_mut() {
            front.clip_to(other);
        }
        if let Some(back) = self.back.as_mut() {
            back.clip_to(other);
        }
    }

    /// Collects every polygon in the tree.
    #[must_use]
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            if let Some(front) = &node.front {
                stack.push(front);
            }
            if let Some(back) = &node.back {
                stack.push(back);
            }
        }
        result
    }
}
