//! `.brcad` sprite and animation container.
//!
//! Big endian. Starts with a magic word and a zero word, then the sheet header, the sprite table
//! and the animation table. Fields whose purpose is unknown are kept as they are.
mod parser;
mod types;
mod writer;

pub use parser::parse_brcad;
pub use types::*;

#[cfg(test)]
mod test {
    use common::{error::CadError, glam::Vec2, Point, Region};

    use crate::{
        Animation, AnimationStep, Brcad, BrcadAnimationExtras, BrcadPartExtras, BrcadSpriteExtras,
        BrcadStepExtras, Sprite, SpritePart,
    };

    const SAMPLE: &[u8] = include_bytes!("../test/sample.brcad");

    #[test]
    fn parse_sample() {
        let brcad = Brcad::open_from_bytes(SAMPLE).unwrap();

        assert_eq!(brcad.header.spritesheet_number, 3);
        assert_eq!(brcad.header.spritesheet_control_word, 0x0102);
        assert_eq!((brcad.header.width, brcad.header.height), (512, 256));
        assert_eq!(brcad.header.after_sprite_count, 7);

        assert_eq!(brcad.sprites().len(), 2);
        assert_eq!(brcad.sprites()[0].extras.reserved, -1);
        assert!(brcad.sprites()[1].parts().is_empty());

        let part = &brcad.sprites()[0].parts()[0];
        assert_eq!(part.region, Region::new(0, 0, 32, 32));
        assert_eq!(part.pos, Point::new(10, -20));
        assert_eq!(part.stretch, Vec2::new(1., -2.));
        assert_eq!(part.rotation, 45.);
        assert!(part.flip_x);
        assert!(!part.flip_y);
        assert_eq!(part.opacity, 200);
        assert_eq!(
            part.extras,
            BrcadPartExtras {
                reserved: 0x12345678,
                reserved_last: 0xAB
            }
        );

        assert_eq!(brcad.animations().len(), 1);

        let animation = &brcad.animations()[0];
        assert_eq!(animation.extras.reserved, 5);
        assert_eq!(animation.steps().len(), 2);

        let step = &animation.steps()[0];
        assert_eq!(step.sprite_index, 1);
        assert_eq!(step.delay, 4);
        assert_eq!(step.opacity, 255);
        assert_eq!(step.extras.reserved_after_stretch, 0x7F);
        assert_eq!(step.extras.reserved_last, [1, 2, 3]);

        assert_eq!(animation.steps()[1].stretch, Vec2::new(1.5, 0.75));
        assert_eq!(animation.steps()[1].extras.reserved, -3);

        assert!(brcad.trailing.is_empty());
    }

    #[test]
    fn sample_replays_byte_for_byte() {
        let brcad = Brcad::open_from_bytes(SAMPLE).unwrap();

        assert_eq!(brcad.write_to_bytes(), SAMPLE);
    }

    #[test]
    fn built_container_round_trips() {
        let mut brcad = Brcad::new();
        brcad.header.spritesheet_number = 1;
        brcad.header.width = 128;
        brcad.header.height = 64;
        brcad.header.after_animation_count = -9;

        let mut sprite = Sprite::new();
        sprite.extras = BrcadSpriteExtras { reserved: 42 };
        sprite
            .add_part(SpritePart {
                region: Region::new(1, 2, 3, 4),
                pos: Point::new(-7, 8),
                stretch: Vec2::new(-1., 0.5),
                rotation: -12.5,
                flip_y: true,
                opacity: 17,
                extras: BrcadPartExtras {
                    reserved: -1,
                    reserved_last: 9,
                },
                ..Default::default()
            })
            .unwrap();
        sprite.add_part(SpritePart::new()).unwrap();
        brcad.add_sprite(sprite).unwrap();
        brcad.add_sprite(Sprite::new()).unwrap();

        let mut animation = Animation::new();
        animation.extras = BrcadAnimationExtras { reserved: 3 };
        animation
            .add_step(AnimationStep {
                sprite_index: 1,
                delay: 30,
                extras: BrcadStepExtras {
                    reserved: 1,
                    reserved_after_stretch: 2,
                    reserved_last: [3, 4, 5],
                },
                ..Default::default()
            })
            .unwrap();
        brcad.add_animation(animation).unwrap();
        brcad.add_animation(Animation::new()).unwrap();

        let bytes = brcad.write_to_bytes();
        let parsed = Brcad::open_from_bytes(&bytes).unwrap();

        assert_eq!(parsed, brcad);
    }

    #[test]
    fn empty_container_is_header_only() {
        let bytes = Brcad::new().write_to_bytes();

        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[..8], [0x01, 0x32, 0xB4, 0xD8, 0, 0, 0, 0]);
        assert_eq!(Brcad::open_from_bytes(&bytes).unwrap(), Brcad::new());
    }

    #[test]
    fn altered_magic() {
        let mut bytes = SAMPLE.to_vec();
        bytes[0] = 0xFF;

        assert!(matches!(
            Brcad::open_from_bytes(&bytes),
            Err(CadError::BadMagic {
                found: 0xFF32B4D8,
                ..
            })
        ));
    }

    #[test]
    fn non_zero_word_after_magic() {
        let mut bytes = SAMPLE.to_vec();
        bytes[7] = 1;

        assert!(matches!(
            Brcad::open_from_bytes(&bytes),
            Err(CadError::BadMagic { expected: 0, found: 1 })
        ));
    }

    #[test]
    fn every_truncation_is_eof() {
        for length in 0..SAMPLE.len() {
            let res = Brcad::open_from_bytes(&SAMPLE[..length]);

            assert!(
                matches!(res, Err(CadError::UnexpectedEof)),
                "length {length}: {res:?}"
            );
        }
    }

    #[test]
    fn extra_bytes_are_kept() {
        let mut bytes = SAMPLE.to_vec();
        bytes.extend([0, 0xEE]);

        let brcad = Brcad::open_from_bytes(&bytes).unwrap();

        assert_eq!(brcad.trailing, [0, 0xEE]);
        assert_eq!(brcad.write_to_bytes(), bytes);
    }

    mod round_trip {
        use common::{glam::Vec2, Point, Region};
        use proptest::prelude::*;

        use crate::{
            Animation, AnimationStep, Brcad, BrcadAnimationExtras, BrcadHeader, BrcadPartExtras,
            BrcadSpriteExtras, BrcadStepExtras, Sprite, SpritePart,
        };

        fn stretch() -> impl Strategy<Value = Vec2> {
            (-8f32..8., -8f32..8.).prop_map(|(x, y)| Vec2::new(x, y))
        }

        fn part() -> impl Strategy<Value = SpritePart> {
            (
                any::<[u16; 4]>(),
                any::<[i16; 2]>(),
                stretch(),
                -360f32..360.,
                any::<(bool, bool, u8)>(),
                any::<(i32, u8)>(),
            )
                .prop_map(|(region, pos, stretch, rotation, flags, extras)| {
                    let [x, y, w, h] = region;
                    let (flip_x, flip_y, opacity) = flags;
                    let (reserved, reserved_last) = extras;

                    SpritePart {
                        region: Region::new(x, y, w, h),
                        pos: Point::new(pos[0], pos[1]),
                        stretch,
                        rotation,
                        flip_x,
                        flip_y,
                        opacity,
                        extras: BrcadPartExtras {
                            reserved,
                            reserved_last,
                        },
                    }
                })
        }

        fn step() -> impl Strategy<Value = AnimationStep> {
            (
                any::<(u16, u16, u8)>(),
                stretch(),
                any::<(i32, i32, [u8; 3])>(),
            )
                .prop_map(|((sprite_index, delay, opacity), stretch, extras)| {
                    let (reserved, reserved_after_stretch, reserved_last) = extras;

                    AnimationStep {
                        sprite_index,
                        delay,
                        stretch,
                        opacity,
                        extras: BrcadStepExtras {
                            reserved,
                            reserved_after_stretch,
                            reserved_last,
                        },
                    }
                })
        }

        fn brcad() -> impl Strategy<Value = Brcad> {
            (
                any::<(u16, u16, u16, u16, i16, i16)>(),
                prop::collection::vec((any::<i16>(), prop::collection::vec(part(), 0..4)), 0..4),
                prop::collection::vec((any::<i16>(), prop::collection::vec(step(), 0..4)), 0..4),
                prop::collection::vec(any::<u8>(), 0..4),
            )
                .prop_map(|(header, sprites, animations, trailing)| {
                    let (
                        spritesheet_number,
                        spritesheet_control_word,
                        width,
                        height,
                        after_sprite_count,
                        after_animation_count,
                    ) = header;

                    let mut brcad = Brcad::new();
                    brcad.header = BrcadHeader {
                        spritesheet_number,
                        spritesheet_control_word,
                        width,
                        height,
                        after_sprite_count,
                        after_animation_count,
                    };
                    brcad.trailing = trailing;

                    for (reserved, parts) in sprites {
                        let mut sprite = Sprite::new();
                        sprite.extras = BrcadSpriteExtras { reserved };

                        for part in parts {
                            sprite.add_part(part).unwrap();
                        }

                        brcad.add_sprite(sprite).unwrap();
                    }

                    for (reserved, steps) in animations {
                        let mut animation = Animation::new();
                        animation.extras = BrcadAnimationExtras { reserved };

                        for step in steps {
                            animation.add_step(step).unwrap();
                        }

                        brcad.add_animation(animation).unwrap();
                    }

                    brcad
                })
        }

        proptest! {
            #[test]
            fn built_containers_read_back_unchanged(brcad in brcad()) {
                let bytes = brcad.write_to_bytes();

                prop_assert_eq!(Brcad::open_from_bytes(&bytes).unwrap(), brcad);
            }
        }
    }
}
