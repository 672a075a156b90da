#[derive(Clone, Debug)]
pub struct FrontBackBuffer<T> {
    pub front: T, // Written by the current step.
    pub back: T,  // Last completed state.
}

impl<T> FrontBackBuffer<T> {
    pub fn new(front: T, back: T) -> Self {
        return FrontBackBuffer { front, back };
    }

    /// Read the back buffer while writing the front buffer.
    pub fn split(&mut self) -> (&T, &mut T) {
        return (&self.back, &mut self.front);
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

#[cfg(test)]
mod tests {
    use super::FrontBackBuffer;

    #[test]
    fn check_swap() {
        let mut b = FrontBackBuffer::new(1, 2);

        {
            let (back, front) = b.split();
            *front = *back + 10;
        }
        b.swap();

        assert!(b.back == 12 && b.front == 2, "Swap not working {:?}", b);
    }
}
