//! Primitive assembler: small per-primitive-type state machines that buffer
//! 1–3 vertex attribute records and emit completed primitives.
//!
//! The working buffer lives in an `ArrayVec` rather than growing on the
//! heap; its capacity (`MAX_PRIMITIVE_VERTICES`) is the largest vertex
//! count any assembler state needs to hold at once (3, for triangles).

use arrayvec::ArrayVec;

use crate::MAX_PRIMITIVE_VERTICES;

type AttrRecord = [f32; crate::MAX_ATTRS];

/// Holds the in-progress vertex buffer for one primitive-type state
/// machine. Reset at the start of every draw.
pub struct Assembler {
    buf: ArrayVec<AttrRecord, MAX_PRIMITIVE_VERTICES>,
}

impl Assembler {
    pub fn new() -> Assembler { Assembler { buf: ArrayVec::new() } }

    pub fn reset(&mut self) { self.buf.clear(); }

    /// LINES: pairs of vertices, independent of each other.
    pub fn feed_lines(&mut self, v: &AttrRecord, mut emit: impl FnMut(&AttrRecord, &AttrRecord)) {
        if self.buf.len() == 1 {
            emit(&self.buf[0], v);
            self.buf.clear();
        } else {
            self.buf.clear();
            self.buf.push(*v);
        }
    }

    /// LINE_STRIP (and LINE_LOOP, via the draw dispatcher prepending the
    /// closing vertex): each new vertex connects to the previous one.
    pub fn feed_line_strip(&mut self, v: &AttrRecord, mut emit: impl FnMut(&AttrRecord, &AttrRecord)) {
        if self.buf.len() == 1 {
            emit(&self.buf[0], v);
            self.buf[0] = *v;
        } else {
            self.buf.clear();
            self.buf.push(*v);
        }
    }

    /// LINE_FAN: every vertex after the first connects back to a fixed pivot.
    pub fn feed_line_fan(&mut self, v: &AttrRecord, mut emit: impl FnMut(&AttrRecord, &AttrRecord)) {
        if self.buf.len() == 1 {
            emit(&self.buf[0], v);
        } else {
            self.buf.clear();
            self.buf.push(*v);
        }
    }

    /// TRIANGLES: independent triples.
    pub fn feed_triangles(&mut self, v: &AttrRecord, mut emit: impl FnMut(&AttrRecord, &AttrRecord, &AttrRecord)) {
        self.buf.push(*v);
        if self.buf.len() == 3 {
            emit(&self.buf[0], &self.buf[1], &self.buf[2]);
            self.buf.clear();
        }
    }

    /// TRIANGLE_STRIP: alternating shared edges.
    pub fn feed_triangle_strip(&mut self, v: &AttrRecord, mut emit: impl FnMut(&AttrRecord, &AttrRecord, &AttrRecord)) {
        if self.buf.len() < 3 {
            self.buf.push(*v);
            if self.buf.len() == 3 {
                emit(&self.buf[0], &self.buf[1], &self.buf[2]);
            }
        } else {
            emit(&self.buf[2], &self.buf[1], v);
            let new_buf: ArrayVec<AttrRecord, MAX_PRIMITIVE_VERTICES> = [self.buf[2], *v].into_iter().collect();
            self.buf = new_buf;
        }
    }

    /// TRIANGLE_FAN: every vertex after the first two shares a fixed pivot
    /// (`buf[0]`) with the most recently seen vertex (`buf[1]`).
    pub fn feed_triangle_fan(&mut self, v: &AttrRecord, mut emit: impl FnMut(&AttrRecord, &AttrRecord, &AttrRecord)) {
        if self.buf.len() < 2 {
            self.buf.push(*v);
        } else {
            emit(&self.buf[0], &self.buf[1], v);
            self.buf[1] = *v;
        }
    }
}

impl Default for Assembler {
    fn default() -> Assembler { Assembler::new() }
}
