use byte_writer::ByteWriter;
use common::codec::{write_point, write_region, write_vec2};

use crate::{
    Animation, AnimationStep, Brcad, BrcadAnimationExtras, BrcadHeader, BrcadPartExtras,
    BrcadSpriteExtras, BrcadStepExtras, Sprite, SpritePart, HEADER_MAGIC,
};

trait WriteToWriter {
    fn write_to_bytes(&self, writer: &mut ByteWriter);
}

pub(crate) fn write_brcad(brcad: &Brcad, writer: &mut ByteWriter) {
    let BrcadHeader {
        spritesheet_number,
        spritesheet_control_word,
        width,
        height,
        after_sprite_count,
        after_animation_count,
    } = &brcad.header;

    writer.append_u32(HEADER_MAGIC);
    writer.append_u32(0);

    writer.append_u16(*spritesheet_number);
    writer.append_u16(*spritesheet_control_word);
    writer.append_u16(*width);
    writer.append_u16(*height);

    writer.append_u16(brcad.sprites().len() as u16);
    writer.append_i16(*after_sprite_count);
    brcad
        .sprites()
        .iter()
        .for_each(|sprite| sprite.write_to_bytes(writer));

    writer.append_u16(brcad.animations().len() as u16);
    writer.append_i16(*after_animation_count);
    brcad
        .animations()
        .iter()
        .for_each(|animation| animation.write_to_bytes(writer));

    writer.append_u8_slice(&brcad.trailing);
}

impl WriteToWriter for Sprite {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let BrcadSpriteExtras { reserved } = self.extras;

        writer.append_u16(self.parts().len() as u16);
        writer.append_i16(reserved);

        self.parts()
            .iter()
            .for_each(|part| part.write_to_bytes(writer));
    }
}

impl WriteToWriter for SpritePart {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let Self {
            region,
            pos,
            stretch,
            rotation,
            flip_x,
            flip_y,
            opacity,
            extras:
                BrcadPartExtras {
                    reserved,
                    reserved_last,
                },
        } = self;

        write_region(writer, region);
        writer.append_i32(*reserved);
        write_point(writer, pos);
        write_vec2(writer, *stretch);
        writer.append_f32(*rotation);
        writer.append_bool(*flip_x);
        writer.append_bool(*flip_y);
        writer.append_u8(*opacity);
        writer.append_u8(*reserved_last);
    }
}

impl WriteToWriter for Animation {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let BrcadAnimationExtras { reserved } = self.extras;

        writer.append_u16(self.steps().len() as u16);
        writer.append_i16(reserved);

        self.steps()
            .iter()
            .for_each(|step| step.write_to_bytes(writer));
    }
}

impl WriteToWriter for AnimationStep {
    fn write_to_bytes(&self, writer: &mut ByteWriter) {
        let Self {
            sprite_index,
            delay,
            stretch,
            opacity,
            extras:
                BrcadStepExtras {
                    reserved,
                    reserved_after_stretch,
                    reserved_last,
                },
        } = self;

        writer.append_u16(*sprite_index);
        writer.append_u16(*delay);
        writer.append_i32(*reserved);
        write_vec2(writer, *stretch);
        writer.append_i32(*reserved_after_stretch);
        writer.append_u8(*opacity);
        writer.append_u8_slice(reserved_last);
    }
}
