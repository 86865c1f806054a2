#![deny(warnings)]

/// Backtracking scanner over any iterator.
///
/// Items pulled from the source are kept in a lookahead buffer until they
/// are extracted (or ignored). `buffer_pos` counts how many buffered items
/// belong to the lexeme currently being scanned, so resetting it to a saved
/// value undoes any speculative `accept`.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos == self.buf.len() {
            self.buf.push(self.src.next()?);
        }
        self.pos += 1;
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: 0}
    }

    pub fn buffer_pos(&self) -> usize { self.pos }

    pub fn set_buffer_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.pos = pos;
        true
    }

    // last item accepted into the current lexeme
    pub fn curr(&self) -> Option<I::Item> {
        self.pos.checked_sub(1).map(|p| self.buf[p].clone())
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.pos]
    }

    // drop the current lexeme, keep lookahead
    pub fn ignore(&mut self) {
        self.buf = self.buf.split_off(self.pos);
        self.pos = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let lexeme: Vec<I::Item> = self.buf.drain(..self.pos).collect();
        self.pos = 0;
        lexeme
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance the scanner only if the next item is in the 'any' set,
    // self.curr() will return the matched item if accept matched any
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.buffer_pos();
        if let Some(next) = self.next() {
            if any.contains(&next) { return Some(next); }
        }
        self.set_buffer_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() { advanced = true; }
        advanced
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
