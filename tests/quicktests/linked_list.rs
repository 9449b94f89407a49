use classic_ds::linked_list::{List, ListError};

quickcheck::quickcheck! {
    fn push_back_keeps_order(xs: Vec<i8>) -> bool {
        let mut list = List::new();
        list.extend(xs.iter().copied());

        list.len() == xs.len() && list.iter().eq(xs.iter())
    }
}

quickcheck::quickcheck! {
    fn push_front_reverses(xs: Vec<i8>) -> bool {
        let mut list = List::new();
        for x in &xs {
            list.push_front(*x);
        }

        list.iter().eq(xs.iter().rev())
    }
}

quickcheck::quickcheck! {
    fn pop_front_drains_everything(xs: Vec<i8>) -> bool {
        let mut list = List::new();
        list.extend(xs.iter().copied());

        let mut popped = Vec::new();
        while let Ok(x) = list.pop_front() {
            popped.push(x);
        }

        popped == xs && list.pop_front() == Err(ListError::Empty)
    }
}

quickcheck::quickcheck! {
    fn display_matches_elements(xs: Vec<u8>) -> bool {
        let mut list = List::new();
        list.extend(xs.iter().copied());

        let mut expected: String = xs.iter().map(|x| format!("{} -> ", x)).collect();
        expected.push_str("null");

        list.to_string() == expected
    }
}
