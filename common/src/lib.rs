//! Pieces shared by the `.brcad` and `.bccad` sprite/animation containers.
//!
//! Both formats describe the same tree: a container owns sprites and animations, a sprite owns
//! parts, an animation owns steps. What differs between the two is carried in the associated
//! types of [`Format`].
pub mod codec;
pub mod color;
pub mod error;
mod format;
mod model;
pub mod transform;
mod utils;

#[cfg(test)]
mod test_format;

pub use format::*;
pub use glam;
pub use model::*;

#[cfg(test)]
mod test {
    use crate::{
        error::CadError, test_format::TestFormat, Animation, AnimationStep, Cad, Sprite, SpritePart,
    };

    type TestCad = Cad<TestFormat>;

    fn step(sprite_index: u16) -> AnimationStep<TestFormat> {
        AnimationStep {
            sprite_index,
            ..Default::default()
        }
    }

    fn cad_with_steps(sprite_count: usize, indices: &[u16]) -> TestCad {
        let mut cad = TestCad::new();

        for _ in 0..sprite_count {
            cad.add_sprite(Sprite::new()).unwrap();
        }

        let mut animation = Animation::new();
        for &index in indices {
            animation.add_step(step(index)).unwrap();
        }
        cad.add_animation(animation).unwrap();

        cad
    }

    fn indices(cad: &TestCad) -> Vec<u16> {
        cad.animations()[0]
            .steps()
            .iter()
            .map(|step| step.sprite_index)
            .collect()
    }

    #[test]
    fn defaults() {
        let part = SpritePart::<TestFormat>::new();
        assert_eq!((part.region.w, part.region.h), (1, 1));
        assert_eq!(part.opacity, 255);
        assert_eq!(part.stretch.x, 1.);

        let step = AnimationStep::<TestFormat>::new();
        assert_eq!(step.delay, 1);
        assert_eq!(step.opacity, 255);

        assert_eq!(TestCad::new().trailing, vec![0]);
    }

    #[test]
    fn removing_sprite_fixes_step_indices() {
        let mut cad = cad_with_steps(3, &[0, 1, 2, 1]);

        cad.remove_sprite(1).unwrap();

        assert_eq!(cad.sprites().len(), 2);
        assert_eq!(indices(&cad), [0, 0, 1, 0]);
    }

    #[test]
    fn inserting_sprite_shifts_step_indices() {
        let mut cad = cad_with_steps(2, &[0, 1, 1]);

        cad.insert_sprite(1, Sprite::new()).unwrap();

        assert_eq!(cad.sprites().len(), 3);
        assert_eq!(indices(&cad), [0, 2, 2]);
    }

    #[test]
    fn inserting_sprite_rejects_unshiftable_step() {
        let mut cad = cad_with_steps(2, &[0, u16::MAX]);

        assert!(matches!(
            cad.insert_sprite(1, Sprite::new()),
            Err(CadError::ListFull { limit: 65536 })
        ));
        assert_eq!(cad.sprites().len(), 2);
        assert_eq!(indices(&cad), [0, u16::MAX]);
    }

    #[test]
    fn swapping_sprites_keeps_steps_on_their_sprite() {
        let mut cad = cad_with_steps(3, &[0, 1, 2]);
        cad.sprite_mut(0)
            .unwrap()
            .add_part(SpritePart::new())
            .unwrap();

        cad.swap_sprites(0, 2).unwrap();

        assert_eq!(indices(&cad), [2, 1, 0]);
        assert_eq!(cad.sprites()[2].parts().len(), 1);
    }

    #[test]
    fn lists_are_bounded() {
        let mut cad = cad_with_steps(3, &[]);

        assert!(matches!(
            cad.add_sprite(Sprite::new()),
            Err(CadError::ListFull { limit: 3 })
        ));

        let mut sprite = Sprite::<TestFormat>::new();
        sprite.add_part(SpritePart::new()).unwrap();
        sprite.insert_part(0, SpritePart::new()).unwrap();
        assert!(matches!(
            sprite.add_part(SpritePart::new()),
            Err(CadError::ListFull { limit: 2 })
        ));

        assert!(matches!(
            Sprite::<TestFormat>::from_parts(vec![SpritePart::new(); 3], ()),
            Err(CadError::ListFull { .. })
        ));
    }

    #[test]
    fn out_of_range_indices() {
        let cad = cad_with_steps(1, &[4]);
        let step = &cad.animations()[0].steps()[0];

        assert!(matches!(
            cad.sprite_for_step(step),
            Err(CadError::IndexOutOfRange {
                index: 4,
                len: 1,
                ..
            })
        ));
        assert!(cad.animation(1).is_err());

        let mut cad = cad;
        assert!(cad.remove_sprite(1).is_err());
        assert!(cad.swap_animations(0, 1).is_err());
        assert!(cad.insert_animation(2, Animation::new()).is_err());
        assert!(cad.insert_animation(1, Animation::new()).is_ok());
    }

    #[test]
    fn step_reordering() {
        let mut animation = Animation::<TestFormat>::new();
        animation.add_step(step(0)).unwrap();
        animation.add_step(step(1)).unwrap();
        animation.steps_mut()[1].delay = 5;

        animation.swap_steps(0, 1).unwrap();

        assert_eq!(animation.steps()[0].sprite_index, 1);
        assert_eq!(animation.total_delay(), 6);

        let removed = animation.remove_step(0).unwrap();
        assert_eq!(removed.delay, 5);
        assert_eq!(animation.steps().len(), 1);
    }
}
