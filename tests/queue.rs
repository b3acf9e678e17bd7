mod tests {
    use rgb_color_mixer::queue::{Queue, TryReceiveError, TrySendError};

    #[test]
    fn test_fifo_order() {
        let queue: Queue<u8, 4> = Queue::new();
        let sender = queue.sender();
        let receiver = queue.receiver();

        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert_eq!(sender.try_send(1), Ok(()));
        assert_eq!(sender.try_send(2), Ok(()));
        assert_eq!(queue.try_send(3), Ok(()));
        assert_eq!(queue.len(), 3);

        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
        assert_eq!(queue.try_receive(), Ok(3));
        assert!(receiver.is_empty());
    }

    #[test]
    fn test_full_queue_returns_value() {
        let queue: Queue<u8, 2> = Queue::new();
        assert_eq!(queue.try_send(1), Ok(()));
        assert_eq!(queue.try_send(2), Ok(()));
        assert_eq!(queue.try_send(3), Err(TrySendError(3)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_drain() {
        let queue: Queue<u8, 8> = Queue::default();
        for value in 0..5 {
            assert_eq!(queue.try_send(value), Ok(()));
        }
        let drained: Vec<u8> = queue.receiver().drain().collect();
        assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        assert!(queue.is_empty());
        assert_eq!(queue.receiver().drain().count(), 0);
    }

    #[test]
    fn test_drain_leaves_late_values_for_next_pass() {
        let queue: Queue<u8, 8> = Queue::new();
        for value in 0..3 {
            assert_eq!(queue.try_send(value), Ok(()));
        }

        let receiver = queue.receiver();
        let mut first_pass = Vec::new();
        for value in receiver.drain() {
            first_pass.push(value);
            // A producer keeps sending while the consumer drains
            assert_eq!(queue.try_send(value + 10), Ok(()));
        }
        assert_eq!(first_pass, vec![0, 1, 2]);
        assert_eq!(queue.len(), 3);

        let second_pass: Vec<u8> = receiver.drain().collect();
        assert_eq!(second_pass, vec![10, 11, 12]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_senders_from_threads() {
        static QUEUE: Queue<u16, 64> = Queue::new();

        let handles: Vec<_> = (0..4u16)
            .map(|worker| {
                std::thread::spawn(move || {
                    let sender = QUEUE.sender();
                    for i in 0..8 {
                        assert!(sender.try_send(worker * 100 + i).is_ok());
                    }
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }

        let values: Vec<u16> = QUEUE.receiver().drain().collect();
        assert_eq!(values.len(), 32);
        for worker in 0..4u16 {
            let own: Vec<u16> = values
                .iter()
                .copied()
                .filter(|value| value / 100 == worker)
                .collect();
            let expected: Vec<u16> = (0..8).map(|i| worker * 100 + i).collect();
            assert_eq!(own, expected);
        }
    }
}
