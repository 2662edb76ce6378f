use std::cmp::max;

use crate::*;

/// The boxes and text of a single table node, positioned relative to its own
/// top left corner until [RenderNode::translate] is applied
#[derive(Debug, Clone)]
pub(crate) struct RenderNode {
    /// Rectangles in (x position, y position, x width, y width)
    pub rects: Vec<(i32, i32, i32, i32)>,
    /// Text location, font height, text length, and string
    pub text: Vec<((i32, i32), i32, i32, String)>,
    /// Where the edge from the parent ends
    pub input_point: (i32, i32),
    /// Where edges to the children start
    pub output_point: (i32, i32),
    /// width in x direction
    pub wx: i32,
    /// width in y direction
    pub wy: i32,
}

impl RenderNode {
    /// `key` is the main line, `sub` is a smaller annotation below it
    pub fn new(key: &str, sub: &str) -> Self {
        let key_len = key.chars().count() as i32;
        let sub_len = sub.chars().count() as i32;
        let key_wx = FONT_WX * key_len;
        let sub_wx = SMALL_FONT_WX * sub_len;
        let wx = max(key_wx, sub_wx) + (2 * PAD);

        let mut text = vec![];
        let mut wy = PAD + FONT_WY;
        text.push((
            (((wx - key_wx) / 2), wy + FONT_ADJUST_Y),
            FONT_WY,
            key_wx,
            key.to_owned(),
        ));
        if !sub.is_empty() {
            wy += SMALL_FONT_WY;
            text.push((
                (((wx - sub_wx) / 2), wy),
                SMALL_FONT_WY,
                sub_wx,
                sub.to_owned(),
            ));
        }
        wy += PAD;

        Self {
            rects: vec![(0, 0, wx, wy)],
            text,
            input_point: (wx / 2, 0),
            output_point: (wx / 2, wy),
            wx,
            wy,
        }
    }

    pub fn translate(&mut self, mov: (i32, i32)) {
        for rect in &mut self.rects {
            rect.0 += mov.0;
            rect.1 += mov.1;
        }
        for tmp in &mut self.text {
            tmp.0 .0 += mov.0;
            tmp.0 .1 += mov.1;
        }
        self.input_point.0 += mov.0;
        self.input_point.1 += mov.1;
        self.output_point.0 += mov.0;
        self.output_point.1 += mov.1;
    }
}
